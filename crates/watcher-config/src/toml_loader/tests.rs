//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_watcher_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        watcher_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
name = "gemini-2.0-flash"
temperature = 0.2

[status]
interval_ms = 500
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-2.0-flash");
    assert!((config.model.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.status.interval_ms, 500);
    // Defaults preserved
    assert_eq!(config.model.api_key_env, "API_KEY");
    assert_eq!(config.persona.loading_messages.len(), 6);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, watcher_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
temperature = 7.5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.model.temperature - 7.5).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("watcher").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-2.5-flash");
    assert_eq!(config.status.interval_ms, 3000);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::WatcherConfig;

    let config: WatcherConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.model.name, "gemini-2.5-flash");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("watcher"));
        assert!(path_str.ends_with("config.toml"));
    }
}
