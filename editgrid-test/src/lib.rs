//! Test utilities for the EditGrid workspace
//!
//! This crate provides common test helpers, fixtures, and assertions shared by
//! the EditGrid crates' integration tests.
//!
//! # Features
//!
//! - **Test Environment**: Isolated home directory with automatic cleanup
//! - **Fixtures**: Reference string pairs with known distances and random sequences
//! - **Assertions**: Checks on edit sets, boundaries and rendered grids

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_boundary_blocked, assert_edits, assert_grid_eq};
pub use environment::TestEnvironment;
pub use fixtures::{random_sequence, WordPair, CLASSIC_PAIRS, UNIT_PAIRS};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
///
/// Honours `RUST_LOG`; output goes through the test harness capture.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run a test with a clean environment
///
/// # Example
/// ```rust
/// use editgrid_test::with_test_env;
///
/// with_test_env(|env| {
///     let corpus = env.write_text("corpus.txt", "kitten sitting")?;
///     assert!(corpus.exists());
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    f(&env)
}
