//! Core error types for editgrid

use std::fmt;
use thiserror::Error;

/// Which of the two compared sequences a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    First,
    Second,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::First => write!(f, "first"),
            Axis::Second => write!(f, "second"),
        }
    }
}

/// Main error type for editgrid operations
#[derive(Error, Debug)]
pub enum EditGridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Position {position} is out of range for the {axis} sequence of length {length}")]
    OutOfRange {
        axis: Axis,
        position: usize,
        length: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for editgrid operations
pub type EditGridResult<T> = Result<T, EditGridError>;

impl EditGridError {
    /// True for the contract violations raised by the alignment engine itself.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            EditGridError::InvalidArgument(_) | EditGridError::OutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for EditGridError {
    fn from(err: serde_json::Error) -> Self {
        EditGridError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for EditGridError {
    fn from(err: toml::de::Error) -> Self {
        EditGridError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<anyhow::Error> for EditGridError {
    fn from(err: anyhow::Error) -> Self {
        EditGridError::Other(err.to_string())
    }
}
