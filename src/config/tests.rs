use tempfile::TempDir;

use super::*;
use crate::env::{FixedEnvironment, OsFamily};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.editor.command, None);
    assert_eq!(config.uninstall.on_failure, OnFailure::Stop);
    assert!(!config.prompt.confirm_destructive);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let env = FixedEnvironment::with_home(OsFamily::Unix, dir.path());
    assert_eq!(Config::load(&env).unwrap(), Config::default());
}

#[test]
fn test_no_home_loads_defaults() {
    let env = FixedEnvironment::new(OsFamily::Unix);
    assert!(Config::load(&env).is_err());
    assert_eq!(Config::load_or_default(&env).unwrap(), Config::default());
}

#[test]
fn test_load_or_default_reads_file_when_home_set() {
    let dir = TempDir::new().unwrap();
    let env = FixedEnvironment::with_home(OsFamily::Unix, dir.path());
    let mut config = Config::default();
    config.set_value("uninstall.on_failure", "continue").unwrap();
    config.save(&env).unwrap();
    assert_eq!(Config::load_or_default(&env).unwrap(), config);
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let env = FixedEnvironment::with_home(OsFamily::Unix, dir.path());
    let mut config = Config::default();
    config.set_value("editor.command", "codium").unwrap();
    config.set_value("uninstall.on_failure", "continue").unwrap();
    config.set_value("prompt.confirm_destructive", "true").unwrap();
    config.save(&env).unwrap();

    assert!(dir.path().join(".config/vscode-manager/config.toml").exists());
    assert_eq!(Config::load(&env).unwrap(), config);
}

#[test]
fn test_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[uninstall]\non_failure = \"continue\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.uninstall.on_failure, OnFailure::Continue);
    assert_eq!(config.editor.command, None);
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[uninstall\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_get_set_values() {
    let mut config = Config::default();
    assert_eq!(config.get_value("editor.command").unwrap(), "");
    assert_eq!(config.get_value("uninstall.on_failure").unwrap(), "stop");
    config.set_value("editor.command", "cursor").unwrap();
    assert_eq!(config.get_value("editor.command").unwrap(), "cursor");
    config.set_value("editor.command", "").unwrap();
    assert_eq!(config.editor.command, None);
}

#[test]
fn test_invalid_values() {
    let mut config = Config::default();
    assert!(config.set_value("uninstall.on_failure", "maybe").is_err());
    assert!(config.set_value("prompt.confirm_destructive", "yes").is_err());
    assert!(config.set_value("nope", "x").is_err());
    assert!(config.get_value("nope").is_err());
}
