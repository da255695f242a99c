//! Ready-made cost models and engines.
//!
//! - [`classic_edit_distance`]: Levenshtein style, minimise, unit indels and 0/2 substitutions.
//! - [`global_alignment`]: Needleman-Wunsch style, maximise, linear gap penalty.
//! - [`local_alignment`]: Smith-Waterman style, maximise, scores clamped at zero.

use crate::cost_model::{Cost, CostModel, Goal, Symbol};
use crate::engine::AlignmentEngine;
use editgrid_core::{ClassicConfig, GlobalConfig, LocalConfig};

/// Substitution function scoring `matched` on equal symbols and `mismatched` otherwise.
pub fn match_mismatch<T: Symbol>(
    matched: Cost,
    mismatched: Cost,
) -> impl Fn(T, T) -> Cost + Send + Sync + Clone + 'static {
    move |a: T, b: T| if a == b { matched } else { mismatched }
}

/// Substitution cost of 0 for a match and 1 otherwise.
pub fn unit_substitution<T: Symbol>() -> impl Fn(T, T) -> Cost + Send + Sync + Clone + 'static {
    match_mismatch::<T>(0, 1)
}

pub fn classic_model<T: Symbol>() -> CostModel<T> {
    CostModel::new().with_goal(Goal::Minimize)
}

/// Boundary `-pos * gap_cost`, indels `-gap_cost`, maximise.
pub fn global_alignment_model<T, F>(gap_cost: Cost, substitution_score: F) -> CostModel<T>
where
    T: Symbol,
    F: Fn(T, T) -> Cost + Send + Sync + 'static,
{
    CostModel::new()
        .with_init_first(move |_, position| gap_penalty(position, gap_cost))
        .with_init_second(move |_, position| gap_penalty(position, gap_cost))
        .with_insertion(move |_| gap_cost.saturating_neg())
        .with_deletion(move |_| gap_cost.saturating_neg())
        .with_substitution(substitution_score)
        .with_goal(Goal::Maximize)
}

fn gap_penalty(position: usize, gap_cost: Cost) -> Cost {
    let position = Cost::try_from(position).unwrap_or(Cost::MAX);
    position.saturating_mul(gap_cost).saturating_neg()
}

/// Zero boundary, indels `-gap_cost`, scores never drop below zero, maximise.
pub fn local_alignment_model<T, F>(gap_cost: Cost, substitution_score: F) -> CostModel<T>
where
    T: Symbol,
    F: Fn(T, T) -> Cost + Send + Sync + 'static,
{
    CostModel::new()
        .with_init_first(|_, _| 0)
        .with_init_second(|_, _| 0)
        .with_insertion(move |_| gap_cost.saturating_neg())
        .with_deletion(move |_| gap_cost.saturating_neg())
        .with_substitution(substitution_score)
        .with_border(Some(0))
        .with_goal(Goal::Maximize)
}

pub fn classic_edit_distance<T: Symbol>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
) -> AlignmentEngine<T> {
    AlignmentEngine::new(first, second, classic_model())
}

pub fn classic_edit_distance_and_compute<T: Symbol>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
) -> AlignmentEngine<T> {
    let mut engine = classic_edit_distance(first, second);
    engine.compute();
    engine
}

/// Global alignment scoring +1 per match and -1 per mismatch.
pub fn global_alignment<T: Symbol>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
    gap_cost: Cost,
) -> AlignmentEngine<T> {
    global_alignment_with(first, second, gap_cost, match_mismatch::<T>(1, -1))
}

pub fn global_alignment_with<T, F>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
    gap_cost: Cost,
    substitution_score: F,
) -> AlignmentEngine<T>
where
    T: Symbol,
    F: Fn(T, T) -> Cost + Send + Sync + 'static,
{
    AlignmentEngine::new(first, second, global_alignment_model(gap_cost, substitution_score))
}

pub fn global_alignment_and_compute<T: Symbol>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
    gap_cost: Cost,
) -> AlignmentEngine<T> {
    let mut engine = global_alignment(first, second, gap_cost);
    engine.compute();
    engine
}

/// Local alignment scoring +1 per match and -1 per mismatch. The best local
/// score is [`AlignmentEngine::best_cell`] after computing, not the corner cell.
pub fn local_alignment<T: Symbol>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
    gap_cost: Cost,
) -> AlignmentEngine<T> {
    local_alignment_with(first, second, gap_cost, match_mismatch::<T>(1, -1))
}

pub fn local_alignment_with<T, F>(
    first: impl Into<Vec<T>>,
    second: impl Into<Vec<T>>,
    gap_cost: Cost,
    substitution_score: F,
) -> AlignmentEngine<T>
where
    T: Symbol,
    F: Fn(T, T) -> Cost + Send + Sync + 'static,
{
    AlignmentEngine::new(first, second, local_alignment_model(gap_cost, substitution_score))
}

impl<T: Symbol> From<&ClassicConfig> for CostModel<T> {
    fn from(config: &ClassicConfig) -> Self {
        let insertion = config.insertion_cost;
        let deletion = config.deletion_cost;
        CostModel::new()
            .with_insertion(move |_| insertion)
            .with_deletion(move |_| deletion)
            .with_substitution(match_mismatch::<T>(config.match_cost, config.mismatch_cost))
            .with_transposition(match_mismatch::<T>(config.match_cost, config.mismatch_cost))
            .with_transpositions(config.transpositions)
            .with_border(config.border)
            .with_goal(Goal::Minimize)
    }
}

impl<T: Symbol> From<&GlobalConfig> for CostModel<T> {
    fn from(config: &GlobalConfig) -> Self {
        global_alignment_model(
            config.gap_cost,
            match_mismatch::<T>(config.match_score, config.mismatch_score),
        )
    }
}

impl<T: Symbol> From<&LocalConfig> for CostModel<T> {
    fn from(config: &LocalConfig) -> Self {
        local_alignment_model(
            config.gap_cost,
            match_mismatch::<T>(config.match_score, config.mismatch_score),
        )
    }
}
