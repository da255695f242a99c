//! Alignment path reconstruction from the recorded edit sets.
//!
//! The walk starts at a computed cell and follows the flags stored by the
//! engine back to the boundary. On ties the preference is substitution,
//! transposition, deletion, insertion. Along row 0 and column 0 the walk
//! continues straight to the origin.

use crate::cost_model::{Cost, Symbol};
use crate::edits::EditSet;
use crate::engine::AlignmentEngine;
use editgrid_core::EditGridResult;
use serde::Serialize;
use std::fmt::{self, Display};
use tracing::debug;

/// One step of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Match,
    Mismatch,
    Insertion,
    Deletion,
    Transposition,
}

impl EditOp {
    fn midline(self) -> char {
        match self {
            EditOp::Match => '|',
            EditOp::Mismatch => '.',
            EditOp::Transposition => 'x',
            EditOp::Insertion | EditOp::Deletion => ' ',
        }
    }
}

impl Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOp::Match => "match",
            EditOp::Mismatch => "mismatch",
            EditOp::Insertion => "insertion",
            EditOp::Deletion => "deletion",
            EditOp::Transposition => "transposition",
        };
        write!(f, "{}", name)
    }
}

/// A column of the alignment. `None` marks a gap on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedColumn<T> {
    pub first: Option<T>,
    pub second: Option<T>,
    pub op: EditOp,
}

/// Result of a traceback.
///
/// A transposition spans two columns, both tagged [`EditOp::Transposition`],
/// but counts as a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment<T> {
    pub score: Cost,
    /// Cell where the walk stopped, as `(i, j)`.
    pub start: (usize, usize),
    /// Cell where the walk began, as `(i, j)`.
    pub end: (usize, usize),
    pub columns: Vec<AlignedColumn<T>>,
}

impl<T> Alignment<T> {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The edit operations in order, one entry per transposition.
    pub fn operations(&self) -> Vec<EditOp> {
        let mut ops = Vec::with_capacity(self.columns.len());
        let mut columns = self.columns.iter();
        while let Some(column) = columns.next() {
            if column.op == EditOp::Transposition {
                columns.next();
            }
            ops.push(column.op);
        }
        ops
    }

    /// Operations other than matches.
    pub fn edit_count(&self) -> usize {
        self.operations()
            .into_iter()
            .filter(|op| *op != EditOp::Match)
            .count()
    }

    /// Fraction of columns that are matches, 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.columns.is_empty() {
            return 0.0;
        }
        let matches = self.columns.iter().filter(|c| c.op == EditOp::Match).count();
        matches as f64 / self.columns.len() as f64
    }

    pub fn midline(&self) -> String {
        self.columns.iter().map(|c| c.op.midline()).collect()
    }
}

impl<T: Display> Alignment<T> {
    pub fn aligned_first(&self) -> String {
        self.columns.iter().map(|c| gapped(&c.first)).collect()
    }

    pub fn aligned_second(&self) -> String {
        self.columns.iter().map(|c| gapped(&c.second)).collect()
    }
}

fn gapped<T: Display>(symbol: &Option<T>) -> String {
    match symbol {
        Some(symbol) => symbol.to_string(),
        None => "-".to_string(),
    }
}

impl<T: Display> Display for Alignment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.aligned_first())?;
        writeln!(f, "{}", self.midline())?;
        write!(f, "{}", self.aligned_second())
    }
}

impl<T: Symbol> AlignmentEngine<T> {
    /// Global alignment ending at `(n, m)`, computing the matrix if needed.
    pub fn traceback(&mut self) -> Alignment<T> {
        let score = self.compute();
        self.walk(self.first().len(), self.second().len(), score, |_, _, _| false)
    }

    /// Alignment of the prefixes ending at `(i, j)`.
    pub fn traceback_from(&mut self, i: usize, j: usize) -> EditGridResult<Alignment<T>> {
        let score = self.compute_at(i, j)?;
        Ok(self.walk(i, j, score, |_, _, _| false))
    }

    /// Local alignment around [`best_cell`](Self::best_cell).
    ///
    /// The walk stops before the first cell that sits at the border value
    /// (zero for the local preset). Returns `None` for an empty sequence.
    pub fn local_traceback(&mut self) -> Option<Alignment<T>> {
        self.compute();
        let (i, j, score) = self.best_cell()?;
        let floor = self.cost_model().border().unwrap_or(0);
        Some(self.walk(i, j, score, move |_, _, cost| cost == floor))
    }

    fn walk<F>(&self, end_i: usize, end_j: usize, score: Cost, stop: F) -> Alignment<T>
    where
        F: Fn(usize, usize, Cost) -> bool,
    {
        let matrix = self.matrix();
        let (first, second) = (self.first(), self.second());
        let mut columns = Vec::with_capacity(end_i + end_j);
        let (mut i, mut j) = (end_i, end_j);

        while i > 0 || j > 0 {
            if stop(i, j, matrix.cost(i, j)) {
                break;
            }
            if i == 0 {
                columns.push(gap_in_first(second[j - 1]));
                j -= 1;
                continue;
            }
            if j == 0 {
                columns.push(gap_in_second(first[i - 1]));
                i -= 1;
                continue;
            }

            let (a, b) = (first[i - 1], second[j - 1]);
            let edits = matrix.edits(i, j);
            if edits.contains(EditSet::SUBSTITUTION) {
                let op = if a == b { EditOp::Match } else { EditOp::Mismatch };
                columns.push(AlignedColumn {
                    first: Some(a),
                    second: Some(b),
                    op,
                });
                i -= 1;
                j -= 1;
            } else if edits.contains(EditSet::TRANSPOSITION) {
                // Pushed in reverse; the column list is flipped at the end.
                columns.push(AlignedColumn {
                    first: Some(a),
                    second: Some(b),
                    op: EditOp::Transposition,
                });
                columns.push(AlignedColumn {
                    first: Some(first[i - 2]),
                    second: Some(second[j - 2]),
                    op: EditOp::Transposition,
                });
                i -= 2;
                j -= 2;
            } else if edits.contains(EditSet::DELETION) {
                columns.push(gap_in_second(a));
                i -= 1;
            } else {
                columns.push(gap_in_first(b));
                j -= 1;
            }
        }
        columns.reverse();

        debug!(
            start_i = i,
            start_j = j,
            end_i,
            end_j,
            columns = columns.len(),
            "Traced alignment"
        );

        Alignment {
            score,
            start: (i, j),
            end: (end_i, end_j),
            columns,
        }
    }
}

fn gap_in_first<T>(symbol: T) -> AlignedColumn<T> {
    AlignedColumn {
        first: None,
        second: Some(symbol),
        op: EditOp::Insertion,
    }
}

fn gap_in_second<T>(symbol: T) -> AlignedColumn<T> {
    AlignedColumn {
        first: Some(symbol),
        second: None,
        op: EditOp::Deletion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_model::CostModel;
    use crate::presets::{global_alignment, local_alignment, unit_substitution};

    #[test]
    fn test_identical_sequences_align_as_matches() {
        let mut engine = AlignmentEngine::from_strs("GATTACA", "GATTACA", CostModel::new());
        let alignment = engine.traceback();

        assert_eq!(alignment.score, 0);
        assert_eq!(alignment.len(), 7);
        assert_eq!(alignment.midline(), "|||||||");
        assert_eq!(alignment.edit_count(), 0);
        assert!((alignment.identity() - 1.0).abs() < f64::EPSILON);
        assert_eq!(alignment.start, (0, 0));
        assert_eq!(alignment.end, (7, 7));
    }

    #[test]
    fn test_global_alignment_with_gap() {
        let first: Vec<char> = "ACGTC".chars().collect();
        let second: Vec<char> = "AGTC".chars().collect();
        let mut engine = global_alignment(first, second, 1);
        let alignment = engine.traceback();

        assert_eq!(alignment.score, 3);
        assert_eq!(alignment.aligned_first(), "ACGTC");
        assert_eq!(alignment.aligned_second(), "A-GTC");
        assert_eq!(alignment.midline(), "| |||");
        assert_eq!(
            alignment.operations(),
            vec![
                EditOp::Match,
                EditOp::Deletion,
                EditOp::Match,
                EditOp::Match,
                EditOp::Match
            ]
        );
    }

    #[test]
    fn test_substitution_preferred_on_ties() {
        // "a" vs "b" ties all three operations at cost 2.
        let mut engine = AlignmentEngine::from_strs("a", "b", CostModel::new());
        let alignment = engine.traceback();
        assert_eq!(alignment.operations(), vec![EditOp::Mismatch]);
        assert_eq!(alignment.to_string(), "a\n.\nb");
    }

    #[test]
    fn test_empty_side_walks_the_boundary() {
        let mut engine = AlignmentEngine::from_strs("", "abc", CostModel::new());
        let alignment = engine.traceback();
        assert_eq!(alignment.aligned_first(), "---");
        assert_eq!(alignment.aligned_second(), "abc");
        assert_eq!(alignment.edit_count(), 3);
        assert_eq!(alignment.identity(), 0.0);
    }

    #[test]
    fn test_transposition_counts_once() {
        let model = CostModel::new()
            .with_substitution(unit_substitution::<char>())
            .with_transposition(|_, _| 1)
            .with_transpositions(true);
        let mut engine = AlignmentEngine::from_strs("cab", "cba", model);
        let alignment = engine.traceback();

        assert_eq!(alignment.score, 1);
        assert_eq!(alignment.len(), 3);
        assert_eq!(alignment.midline(), "|xx");
        assert_eq!(alignment.operations(), vec![EditOp::Match, EditOp::Transposition]);
        assert_eq!(alignment.edit_count(), 1);
    }

    #[test]
    fn test_traceback_from_prefix() {
        let mut engine = AlignmentEngine::from_strs("kitten", "sitting", CostModel::new());
        let alignment = engine.traceback_from(3, 3).unwrap();
        assert_eq!(alignment.end, (3, 3));
        assert_eq!(alignment.aligned_second(), "sit");
        assert!(engine.traceback_from(7, 0).is_err());
    }

    #[test]
    fn test_local_traceback() {
        let first: Vec<char> = "xxabcxx".chars().collect();
        let second: Vec<char> = "yabcy".chars().collect();
        let mut engine = local_alignment(first, second, 1);
        let alignment = engine.local_traceback().unwrap();

        assert_eq!(alignment.score, 3);
        assert_eq!(alignment.aligned_first(), "abc");
        assert_eq!(alignment.aligned_second(), "abc");
        assert_eq!(alignment.start, (2, 1));
        assert_eq!(alignment.end, (5, 4));

        let mut empty = local_alignment(Vec::<char>::new(), vec!['a'], 1);
        assert!(empty.local_traceback().is_none());
    }
}
