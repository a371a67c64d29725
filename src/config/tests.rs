//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_PATH, OutputFormat};
use crate::error::ParamsError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.parameter_sets_dir, "parameters");
    assert_eq!(config.output, OutputFormat::Yaml);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.parameter_sets_dir, "parameters");
    assert_eq!(config.output, OutputFormat::Yaml);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
parameter_sets_dir: /var/lib/params
output: json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.parameter_sets_dir, "/var/lib/params");
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = Config::from_yaml("future_option: true\noutput: json\n").unwrap();
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_invalid_output_is_format_error() {
    let err = Config::from_yaml("output: xml").unwrap_err();
    assert!(matches!(err, ParamsError::Format { .. }));
}

#[test]
fn test_empty_parameter_sets_dir_fails_validation() {
    let err = Config::from_yaml("parameter_sets_dir: \"  \"").unwrap_err();

    assert!(matches!(err, ParamsError::UserError(_)));
    assert!(err.to_string().contains("parameter_sets_dir"));
}

#[test]
fn test_load_resolves_relative_dir_against_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "parameter_sets_dir: sets\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.parameter_sets_path(), temp_dir.path().join("sets"));
    assert_eq!(
        config.parameter_set_path("mysql").unwrap(),
        temp_dir.path().join("sets").join("mysql.yaml")
    );
}

#[test]
fn test_absolute_dir_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let sets = temp_dir.path().join("elsewhere");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, format!("parameter_sets_dir: {}\n", sets.display())).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.parameter_sets_path(), sets);
}

#[test]
fn test_load_missing_file_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ParamsError::Storage { .. }));
}

#[test]
fn test_resolve_without_file_uses_defaults_in_cwd() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::resolve(None, temp_dir.path()).unwrap();

    assert_eq!(config.output, OutputFormat::Yaml);
    assert_eq!(
        config.parameter_sets_path(),
        temp_dir.path().join("parameters")
    );
}

#[test]
fn test_resolve_finds_default_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_CONFIG_PATH);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "output: json\n").unwrap();

    let config = Config::resolve(None, temp_dir.path()).unwrap();

    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(
        config.parameter_sets_path(),
        temp_dir.path().join(".bundle-params").join("parameters")
    );
}

#[test]
fn test_resolve_explicit_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::resolve(Some(Path::new("/nonexistent/config.yaml")), temp_dir.path())
        .unwrap_err();
    assert!(matches!(err, ParamsError::Storage { .. }));
}

#[test]
fn test_parameter_set_name_must_be_single_component() {
    let config = Config::default();

    for name in ["", ".", "..", "a/b", "..\\x"] {
        let err = config.parameter_set_path(name).unwrap_err();
        assert!(matches!(err, ParamsError::UserError(_)), "name {:?}", name);
    }
    assert!(config.parameter_set_path("mysql-prod").is_ok());
}
