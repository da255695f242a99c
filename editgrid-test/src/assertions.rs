//! Custom assertions for testing
//!
//! Provides specialized assertions for alignment matrices.

use editgrid_align::{AlignmentEngine, AlignmentMatrix, EditSet, Symbol};

/// Assert that cell `(i, j)` recorded exactly `expected`
pub fn assert_edits(matrix: &AlignmentMatrix, i: usize, j: usize, expected: EditSet) {
    let actual = matrix.edits(i, j);
    assert_eq!(
        actual, expected,
        "Cell ({}, {}) recorded {} but expected {}",
        i, j, actual, expected
    );
}

/// Assert that row 0 and column 0 hold the model's seeds and are blocked
pub fn assert_boundary_blocked<T: Symbol>(engine: &AlignmentEngine<T>) {
    let matrix = engine.matrix();
    let model = engine.cost_model();

    assert_eq!(matrix.get(0, 0), Some(0), "Origin must be seeded with 0");
    for (idx, &symbol) in engine.first().iter().enumerate() {
        let i = idx + 1;
        assert!(matrix.edits(i, 0).is_blocked(), "Cell ({}, 0) is not blocked", i);
        assert_eq!(
            matrix.get(i, 0),
            Some(model.init_first(symbol, i)),
            "Cell ({}, 0) does not hold its seed",
            i
        );
    }
    for (idx, &symbol) in engine.second().iter().enumerate() {
        let j = idx + 1;
        assert!(matrix.edits(0, j).is_blocked(), "Cell (0, {}) is not blocked", j);
        assert_eq!(
            matrix.get(0, j),
            Some(model.init_second(symbol, j)),
            "Cell (0, {}) does not hold its seed",
            j
        );
    }
    for i in 1..matrix.rows() {
        for j in 1..matrix.cols() {
            assert!(
                !matrix.edits(i, j).is_blocked(),
                "Interior cell ({}, {}) is blocked",
                i,
                j
            );
        }
    }
}

/// Assert that every populated cost matches `expected` row by row
///
/// `None` entries stand for cells that must still be unpopulated.
pub fn assert_grid_eq(matrix: &AlignmentMatrix, expected: &[Vec<Option<i32>>]) {
    assert_eq!(matrix.rows(), expected.len(), "Row count differs");
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(matrix.cols(), row.len(), "Column count differs in row {}", i);
        for (j, cell) in row.iter().enumerate() {
            assert_eq!(
                matrix.get(i, j),
                *cell,
                "Cell ({}, {}) differs",
                i,
                j
            );
        }
    }
}
