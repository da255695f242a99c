//! The memoised edit distance / alignment engine.
//!
//! `compute_at(i, j)` populates every cell the recurrence depends on, which is
//! exactly the rectangle `[0..=i] x [0..=j]`. The rectangle is filled row by
//! row so that each dependency is ready before it is read, which keeps the
//! call stack flat no matter how long the sequences are. Cells that are
//! already populated are never touched again.

use crate::cost_model::{Cost, CostModel, Goal, Symbol};
use crate::edits::EditSet;
use crate::matrix::AlignmentMatrix;
use editgrid_core::{Axis, EditGridError, EditGridResult};
use smallvec::SmallVec;
use tracing::{debug, trace};

pub struct AlignmentEngine<T> {
    first: Vec<T>,
    second: Vec<T>,
    model: CostModel<T>,
    matrix: AlignmentMatrix,
}

impl<T: Symbol> AlignmentEngine<T> {
    /// Set up the matrices for `first` against `second` and seed the boundary.
    pub fn new(first: impl Into<Vec<T>>, second: impl Into<Vec<T>>, model: CostModel<T>) -> Self {
        let first = first.into();
        let second = second.into();
        let mut matrix = AlignmentMatrix::new(first.len() + 1, second.len() + 1);

        matrix.set(0, 0, 0, EditSet::BLOCKED);
        for (idx, &symbol) in first.iter().enumerate() {
            matrix.set(idx + 1, 0, model.init_first(symbol, idx + 1), EditSet::BLOCKED);
        }
        for (idx, &symbol) in second.iter().enumerate() {
            matrix.set(0, idx + 1, model.init_second(symbol, idx + 1), EditSet::BLOCKED);
        }

        debug!(
            first_len = first.len(),
            second_len = second.len(),
            goal = %model.goal(),
            border = ?model.border(),
            "Initialised alignment matrix"
        );

        Self {
            first,
            second,
            model,
            matrix,
        }
    }

    pub fn builder() -> AlignmentEngineBuilder<T> {
        AlignmentEngineBuilder::default()
    }

    /// The optimal cost (or score) at `(i, j)`, computing every cell it
    /// depends on.
    pub fn compute_at(&mut self, i: usize, j: usize) -> EditGridResult<Cost> {
        if i > self.first.len() {
            return Err(EditGridError::OutOfRange {
                axis: Axis::First,
                position: i,
                length: self.first.len(),
            });
        }
        if j > self.second.len() {
            return Err(EditGridError::OutOfRange {
                axis: Axis::Second,
                position: j,
                length: self.second.len(),
            });
        }
        Ok(self.fill(i, j))
    }

    /// The whole-sequence result, i.e. `compute_at(n, m)`.
    pub fn compute(&mut self) -> Cost {
        self.fill(self.first.len(), self.second.len())
    }

    /// Alias of [`compute`](Self::compute) that reads better for edit distances.
    pub fn distance(&mut self) -> Cost {
        self.compute()
    }

    fn fill(&mut self, i: usize, j: usize) -> Cost {
        if self.matrix.is_populated(i, j) {
            return self.matrix.cost(i, j);
        }

        let before = self.matrix.populated_cells();
        for row in 1..=i {
            for col in 1..=j {
                if !self.matrix.is_populated(row, col) {
                    self.compute_cell(row, col);
                }
            }
        }

        let cost = self.matrix.cost(i, j);
        debug!(
            i,
            j,
            cost,
            new_cells = self.matrix.populated_cells() - before,
            "Computed alignment cell"
        );
        cost
    }

    /// Evaluate one interior cell whose dependencies are already populated.
    /// Candidate sums saturate at the bounds of [`Cost`].
    fn compute_cell(&mut self, i: usize, j: usize) {
        let a = self.first[i - 1];
        let b = self.second[j - 1];
        let goal = self.model.goal();

        let mut candidates: SmallVec<[(EditSet, Cost); 4]> = SmallVec::new();
        candidates.push((
            EditSet::DELETION,
            self.matrix.cost(i - 1, j).saturating_add(self.model.deletion(a)),
        ));
        candidates.push((
            EditSet::INSERTION,
            self.matrix.cost(i, j - 1).saturating_add(self.model.insertion(b)),
        ));
        candidates.push((
            EditSet::SUBSTITUTION,
            self.matrix
                .cost(i - 1, j - 1)
                .saturating_add(self.model.substitution(a, b)),
        ));
        if let Some(cost) = self.transposition_candidate(i, j) {
            candidates.push((EditSet::TRANSPOSITION, cost));
        }

        let best = match goal.best(candidates.iter().map(|&(_, cost)| cost)) {
            Some(best) => best,
            None => unreachable!("an interior cell always has candidates"),
        };

        let mut edits = EditSet::NONE;
        for &(op, cost) in &candidates {
            if cost == best {
                edits |= op;
            }
        }

        let cost = goal.clamp(best, self.model.border());
        trace!(i, j, cost, edits = %edits, "cell");
        self.matrix.set(i, j, cost, edits);
    }

    /// `D(i-2, j-2) + transposition` when the last two symbols of both
    /// prefixes are swapped copies of each other.
    fn transposition_candidate(&self, i: usize, j: usize) -> Option<Cost> {
        if !self.model.transpositions_enabled() || i < 2 || j < 2 {
            return None;
        }
        let (a1, a2) = (self.first[i - 2], self.first[i - 1]);
        let (b1, b2) = (self.second[j - 2], self.second[j - 1]);
        if a1 != a2 && a1 == b2 && a2 == b1 {
            let swap = self.model.transposition(a1, a2);
            Some(self.matrix.cost(i - 2, j - 2).saturating_add(swap))
        } else {
            None
        }
    }

    /// The interior cell holding the best value under the model's goal,
    /// looking only at cells computed so far. Ties go to the first cell in
    /// row-major order.
    pub fn best_cell(&self) -> Option<(usize, usize, Cost)> {
        let goal = self.model.goal();
        let mut best: Option<(usize, usize, Cost)> = None;
        for i in 1..self.matrix.rows() {
            for j in 1..self.matrix.cols() {
                if let Some(cost) = self.matrix.get(i, j) {
                    match best {
                        Some((_, _, b)) if !goal.prefers(cost, b) => {}
                        _ => best = Some((i, j, cost)),
                    }
                }
            }
        }
        best
    }
}

impl<T> AlignmentEngine<T> {
    pub fn first(&self) -> &[T] {
        &self.first
    }

    pub fn second(&self) -> &[T] {
        &self.second
    }

    pub fn cost_model(&self) -> &CostModel<T> {
        &self.model
    }

    pub fn goal(&self) -> Goal {
        self.model.goal()
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        &self.matrix
    }

    pub fn is_computed(&self, i: usize, j: usize) -> bool {
        self.matrix.contains(i, j) && self.matrix.is_populated(i, j)
    }
}

impl AlignmentEngine<char> {
    /// Compare two strings character by character.
    pub fn from_strs(first: &str, second: &str, model: CostModel<char>) -> Self {
        Self::new(
            first.chars().collect::<Vec<_>>(),
            second.chars().collect::<Vec<_>>(),
            model,
        )
    }
}

/// Builder that reports missing sequences as errors instead of requiring
/// both up front.
pub struct AlignmentEngineBuilder<T> {
    first: Option<Vec<T>>,
    second: Option<Vec<T>>,
    model: Option<CostModel<T>>,
}

impl<T> Default for AlignmentEngineBuilder<T> {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            model: None,
        }
    }
}

impl<T: Symbol> AlignmentEngineBuilder<T> {
    pub fn first(mut self, sequence: impl Into<Vec<T>>) -> Self {
        self.first = Some(sequence.into());
        self
    }

    pub fn second(mut self, sequence: impl Into<Vec<T>>) -> Self {
        self.second = Some(sequence.into());
        self
    }

    pub fn cost_model(mut self, model: CostModel<T>) -> Self {
        self.model = Some(model);
        self
    }

    /// Fails with `InvalidArgument` when either sequence was never supplied.
    /// A missing cost model falls back to [`CostModel::new`].
    pub fn build(self) -> EditGridResult<AlignmentEngine<T>> {
        let first = self.first.ok_or_else(|| {
            EditGridError::InvalidArgument("the first sequence must not be absent".to_string())
        })?;
        let second = self.second.ok_or_else(|| {
            EditGridError::InvalidArgument("the second sequence must not be absent".to_string())
        })?;
        Ok(AlignmentEngine::new(
            first,
            second,
            self.model.unwrap_or_default(),
        ))
    }
}
