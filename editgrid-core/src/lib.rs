//! Core utilities and types shared across all editgrid crates

pub mod config;
pub mod error;
pub mod system;

// Re-export commonly used types
pub use config::{
    load_config, save_config, ClassicConfig, Config, GlobalConfig, LocalConfig, RenderConfig,
    WordsConfig,
};
pub use error::{Axis, EditGridError, EditGridResult};
pub use system::{default_config_path, editgrid_home};
