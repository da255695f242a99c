//! Generalised edit distance and sequence alignment for EditGrid
//!
//! This crate provides:
//! - A pluggable [`CostModel`] covering boundary seeds, edit costs, clamping
//!   and the optimisation goal
//! - The memoised [`AlignmentEngine`] with on-demand cell evaluation
//! - Ready-made presets (classic edit distance, global and local alignment)
//! - Text rendering of the cost and edit matrices
//! - Traceback of an optimal alignment path

pub mod cost_model;
pub mod edits;
pub mod engine;
pub mod matrix;
pub mod presets;
pub mod render;
pub mod traceback;

pub use cost_model::{Cost, CostModel, Goal, Symbol};
pub use edits::EditSet;
pub use engine::{AlignmentEngine, AlignmentEngineBuilder};
pub use matrix::AlignmentMatrix;
pub use presets::{
    classic_edit_distance, classic_edit_distance_and_compute, global_alignment,
    global_alignment_and_compute, global_alignment_with, local_alignment, local_alignment_with,
    match_mismatch, unit_substitution,
};
pub use render::MatrixRenderer;
pub use traceback::{AlignedColumn, Alignment, EditOp};

// Re-export the shared error type so callers need only one import
pub use editgrid_core::{Axis, EditGridError, EditGridResult};
