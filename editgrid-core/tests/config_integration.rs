/// Integration tests for configuration loading and saving
use editgrid_core::config::{default_config, load_config, save_config, Config};
use editgrid_core::EditGridError;
use editgrid_test::{with_test_env, TestEnvironment};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_partial_config_keeps_defaults() {
    let env = TestEnvironment::new().unwrap();
    let path = env
        .write_text(
            "config.toml",
            r#"
[classic]
mismatch_cost = 1
border = 4

[render]
cell_width = 3
"#,
        )
        .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.classic.mismatch_cost, 1);
    assert_eq!(config.classic.border, Some(4));
    assert_eq!(config.classic.insertion_cost, 1); // Default
    assert_eq!(config.render.cell_width, 3);
    assert_eq!(config.global, default_config().global);
    assert_eq!(config.words, default_config().words);
}

#[test]
fn test_empty_file_is_default_config() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_text("config.toml", "").unwrap();
    assert_eq!(load_config(&path).unwrap(), Config::default());
}

#[test]
fn test_save_then_load() {
    with_test_env(|env| {
        let mut config = Config::default();
        config.classic.transpositions = true;
        config.local.gap_cost = 3;
        config.words.max_distance = 1;

        save_config(env.config_path(), &config)?;
        let saved = fs::read_to_string(env.config_path())?;
        assert!(saved.contains("[classic]"));
        assert!(saved.contains("transpositions = true"));

        assert_eq!(load_config(env.config_path())?, config);
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_missing_file_is_io_error() {
    let env = TestEnvironment::new().unwrap();
    let err = load_config(env.home().join("nope.toml")).unwrap_err();
    assert!(matches!(err, EditGridError::Io(_)));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let env = TestEnvironment::new().unwrap();
    let path = env
        .write_text("config.toml", "[classic]\ninsertion_cost = \"one\"\n")
        .unwrap();
    match load_config(&path) {
        Err(EditGridError::Configuration(msg)) => {
            assert!(msg.starts_with("Failed to parse config"))
        }
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_json_export() {
    let json = Config::default().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["classic"]["mismatch_cost"], 2);
    assert_eq!(value["global"]["mismatch_score"], -1);
    assert!(value["classic"]["border"].is_null());
}
