pub mod cli;
pub mod words;

pub use words::{Neighbor, Occurrence, WordIndex};
