use crate::cost_model::Cost;
use crate::edits::EditSet;

/// Co-indexed cost and edit grids of `(n+1) x (m+1)` cells, stored row-major.
///
/// Cells start out unpopulated and are written exactly once; there is no way
/// to overwrite or invalidate a computed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    rows: usize,
    cols: usize,
    costs: Vec<Cost>,
    edits: Vec<EditSet>,
}

impl AlignmentMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            costs: vec![0; rows * cols],
            edits: vec![EditSet::NONE; rows * cols],
        }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols, "cell ({}, {}) outside matrix", i, j);
        i * self.cols + j
    }

    /// Number of rows, i.e. `n + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, i.e. `m + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols
    }

    /// Raw cost at `(i, j)`. Unpopulated cells read as 0; use [`get`](Self::get)
    /// to tell them apart.
    pub fn cost(&self, i: usize, j: usize) -> Cost {
        self.costs[self.index(i, j)]
    }

    pub fn edits(&self, i: usize, j: usize) -> EditSet {
        self.edits[self.index(i, j)]
    }

    /// The cost at `(i, j)` if that cell exists and has been populated.
    pub fn get(&self, i: usize, j: usize) -> Option<Cost> {
        if self.contains(i, j) && self.is_populated(i, j) {
            Some(self.cost(i, j))
        } else {
            None
        }
    }

    pub fn is_populated(&self, i: usize, j: usize) -> bool {
        self.edits(i, j).is_populated()
    }

    pub fn populated_cells(&self) -> usize {
        self.edits.iter().filter(|e| e.is_populated()).count()
    }

    /// Costs of row `i`, populated or not.
    pub fn row(&self, i: usize) -> &[Cost] {
        let start = self.index(i, 0);
        &self.costs[start..start + self.cols]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, cost: Cost, edits: EditSet) {
        let idx = self.index(i, j);
        debug_assert!(!self.edits[idx].is_populated(), "cell ({}, {}) written twice", i, j);
        debug_assert!(edits.is_populated());
        self.costs[idx] = cost;
        self.edits[idx] = edits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_unpopulated() {
        let matrix = AlignmentMatrix::new(3, 4);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 4);
        assert_eq!(matrix.populated_cells(), 0);
        assert_eq!(matrix.get(2, 3), None);
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_set_and_read_back() {
        let mut matrix = AlignmentMatrix::new(2, 2);
        matrix.set(1, 1, -3, EditSet::DELETION | EditSet::INSERTION);

        assert_eq!(matrix.get(1, 1), Some(-3));
        assert_eq!(matrix.cost(1, 1), -3);
        assert!(matrix.edits(1, 1).is_tie());
        assert_eq!(matrix.row(1), &[0, -3]);
        assert_eq!(matrix.populated_cells(), 1);
    }

    #[test]
    #[should_panic(expected = "written twice")]
    #[cfg(debug_assertions)]
    fn test_cells_are_write_once() {
        let mut matrix = AlignmentMatrix::new(1, 1);
        matrix.set(0, 0, 0, EditSet::BLOCKED);
        matrix.set(0, 0, 1, EditSet::BLOCKED);
    }
}
