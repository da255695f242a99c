//! Test environment management
//!
//! Provides an isolated EditGrid home directory with automatic cleanup using RAII.

use anyhow::{Context, Result};
use editgrid_core::{save_config, Config};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory for config files and input text
pub struct TestEnvironment {
    // Held for its Drop, which removes the directory
    _temp_dir: TempDir,
    root_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("editgrid-test")
            .context("Failed to create temporary directory")?;
        let root_path = temp_dir.path().to_path_buf();

        Ok(Self {
            _temp_dir: temp_dir,
            root_path,
        })
    }

    /// Directory to point `EDITGRID_HOME` at
    pub fn home(&self) -> &Path {
        &self.root_path
    }

    pub fn config_path(&self) -> PathBuf {
        self.root_path.join("config.toml")
    }

    /// Write `config` to `config.toml` under the home directory
    pub fn write_config(&self, config: &Config) -> Result<PathBuf> {
        let path = self.config_path();
        save_config(&path, config).context("Failed to write test config")?;
        Ok(path)
    }

    /// Write a text file under the home directory
    pub fn write_text(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root_path.join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
