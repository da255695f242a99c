//! Configuration types for editgrid

use crate::EditGridError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub classic: ClassicConfig,
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub words: WordsConfig,
}

/// Costs for the classic edit distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassicConfig {
    #[serde(default = "default_unit_cost")]
    pub insertion_cost: i32,
    #[serde(default = "default_unit_cost")]
    pub deletion_cost: i32,
    #[serde(default = "default_match_cost")]
    pub match_cost: i32,
    #[serde(default = "default_mismatch_cost")]
    pub mismatch_cost: i32,
    /// Costs never exceed this value when set
    #[serde(default)]
    pub border: Option<i32>,
    /// Consider swaps of adjacent symbols as a single edit
    #[serde(default)]
    pub transpositions: bool,
}

/// Needleman-Wunsch style global alignment scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    #[serde(default = "default_unit_cost")]
    pub gap_cost: i32,
    #[serde(default = "default_match_score")]
    pub match_score: i32,
    #[serde(default = "default_mismatch_score")]
    pub mismatch_score: i32,
}

/// Smith-Waterman style local alignment scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalConfig {
    #[serde(default = "default_unit_cost")]
    pub gap_cost: i32,
    #[serde(default = "default_match_score")]
    pub match_score: i32,
    #[serde(default = "default_mismatch_score")]
    pub mismatch_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Minimum width of the numeric column in each rendered cell
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default)]
    pub show_matrix: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordsConfig {
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default = "default_max_distance")]
    pub max_distance: i32,
}

// Default value functions
fn default_unit_cost() -> i32 { 1 }
fn default_match_cost() -> i32 { 0 }
fn default_mismatch_cost() -> i32 { 2 }
fn default_match_score() -> i32 { 1 }
fn default_mismatch_score() -> i32 { -1 }
fn default_cell_width() -> usize { 2 }
fn default_lowercase() -> bool { true }
fn default_max_distance() -> i32 { 2 }

impl Default for ClassicConfig {
    fn default() -> Self {
        Self {
            insertion_cost: default_unit_cost(),
            deletion_cost: default_unit_cost(),
            match_cost: default_match_cost(),
            mismatch_cost: default_mismatch_cost(),
            border: None,
            transpositions: false,
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            gap_cost: default_unit_cost(),
            match_score: default_match_score(),
            mismatch_score: default_mismatch_score(),
        }
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            gap_cost: default_unit_cost(),
            match_score: default_match_score(),
            mismatch_score: default_mismatch_score(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            show_matrix: false,
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            lowercase: default_lowercase(),
            max_distance: default_max_distance(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, EditGridError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), EditGridError> {
    let contents = config.to_toml()?;
    std::fs::write(path, contents)?;
    Ok(())
}

impl Config {
    pub fn to_toml(&self) -> Result<String, EditGridError> {
        toml::to_string_pretty(self)
            .map_err(|e| EditGridError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, EditGridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.classic.insertion_cost, 1);
        assert_eq!(config.classic.deletion_cost, 1);
        assert_eq!(config.classic.match_cost, 0);
        assert_eq!(config.classic.mismatch_cost, 2);
        assert_eq!(config.classic.border, None);
        assert!(!config.classic.transpositions);

        assert_eq!(config.global.gap_cost, 1);
        assert_eq!(config.global.match_score, 1);
        assert_eq!(config.global.mismatch_score, -1);

        assert_eq!(config.local, LocalConfig::default());

        assert_eq!(config.render.cell_width, 2);
        assert!(!config.render.show_matrix);

        assert!(config.words.lowercase);
        assert_eq!(config.words.max_distance, 2);
    }

    #[test]
    fn test_default_config_function() {
        assert_eq!(Config::default(), default_config());
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[classic]
mismatch_cost = 1
border = 5

[global]
gap_cost = 2
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.classic.mismatch_cost, 1);
        assert_eq!(config.classic.border, Some(5));
        assert_eq!(config.global.gap_cost, 2);

        // Unspecified fields keep their defaults
        assert_eq!(config.classic.insertion_cost, 1);
        assert_eq!(config.global.match_score, 1);
        assert_eq!(config.render.cell_width, 2);
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            EditGridError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            EditGridError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_reload() {
        let mut config = Config::default();
        config.classic.border = Some(3);
        config.classic.transpositions = true;
        config.local.gap_cost = 4;
        config.render.show_matrix = true;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();

        let loaded = load_config(temp_file.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_negative_scores_survive_serialization() {
        let mut config = Config::default();
        config.global.mismatch_score = -7;

        let toml = config.to_toml().unwrap();
        assert!(toml.contains("mismatch_score = -7"));

        let json = config.to_json().unwrap();
        assert!(json.contains("\"mismatch_score\": -7"));
    }
}
