//! Filesystem locations used by editgrid

pub mod paths;

pub use paths::{default_config_path, editgrid_home};
