use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use super::*;

fn settings_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("settings.json");
    fs::write(&path, contents).unwrap();
    path
}

fn key_order(settings: &Settings) -> Vec<String> {
    let map: Map<String, Value> = serde_json::from_str(&settings.to_pretty_json()).unwrap();
    map.keys().cloned().collect()
}

#[test]
fn test_load_preserves_key_order() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir, r#"{"z": 1, "a": {"nested": [1, 2]}, "m": null}"#);
    let settings = Settings::load(&path).unwrap();
    assert_eq!(key_order(&settings), ["z", "a", "m"]);
    assert_eq!(settings.get("a"), Some(&json!({"nested": [1, 2]})));
}

#[test]
fn test_save_uses_two_space_indent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = Settings::new();
    settings.set(TELEMETRY_LEVEL_KEY, "off");
    settings.save(&path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"telemetry.telemetryLevel\": \"off\"\n}"
    );
}

#[test]
fn test_set_existing_key_keeps_position() {
    let mut settings = Settings::parse(r#"{"a": 1, "b": 2, "c": 3}"#, Path::new("s.json")).unwrap();
    let previous = settings.set("b", 20);
    assert_eq!(previous, Some(json!(2)));
    assert_eq!(key_order(&settings), ["a", "b", "c"]);
}

#[test]
fn test_merge_overwrites_and_appends() {
    let mut base = Settings::parse(r#"{"a": 1, "b": 2}"#, Path::new("s.json")).unwrap();
    let other = Settings::parse(r#"{"c": 3, "a": "x"}"#, Path::new("o.json")).unwrap();
    base.merge(other);
    assert_eq!(key_order(&base), ["a", "b", "c"]);
    assert_eq!(base.get("a"), Some(&json!("x")));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir, "{ not json");
    assert!(matches!(Settings::load(&path), Err(Error::SettingsParse { .. })));
}

#[test]
fn test_non_object_json() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir, "[1, 2]");
    assert!(matches!(Settings::load(&path), Err(Error::SettingsNotObject { .. })));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    assert!(matches!(Settings::load(&path), Err(Error::FileNotFound { .. })));
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    write_atomic(&path, EMPTY_SETTINGS.as_bytes()).unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_write_into_missing_dir_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent").join("settings.json");
    assert!(matches!(
        write_atomic(&path, b"{}"),
        Err(Error::FileNotFound { .. })
    ));
}

#[test]
fn test_copy_file_is_byte_exact() {
    let dir = TempDir::new().unwrap();
    let from = settings_file(&dir, "{\r\n\t\"odd\":   true // comment\n}");
    let to = dir.path().join("copy.json");
    copy_file(&from, &to).unwrap();
    assert_eq!(fs::read(&from).unwrap(), fs::read(&to).unwrap());
}

#[cfg(unix)]
#[test]
fn test_save_through_symlink_keeps_link() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    let real = dir.path().join("dotfiles").join("settings.json");
    fs::create_dir_all(real.parent().unwrap()).unwrap();
    fs::write(&real, r#"{"a": 1}"#).unwrap();
    let link = dir.path().join("settings.json");
    symlink(&real, &link).unwrap();

    let mut settings = Settings::load(&link).unwrap();
    settings.set(TELEMETRY_LEVEL_KEY, "off");
    settings.save(&link).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), real);
    assert_eq!(
        Settings::load(&real).unwrap().get(TELEMETRY_LEVEL_KEY),
        Some(&json!("off"))
    );
    assert_eq!(fs::read_dir(real.parent().unwrap()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn test_write_atomic_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir, r#"{"a": 1}"#);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

    write_atomic(&path, EMPTY_SETTINGS.as_bytes()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ._-]{0,10}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-z.]{1,8}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn save_then_load_round_trips(pairs in prop::collection::vec(("[a-zA-Z.]{1,12}", json_value()), 0..6)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::new();
        for (key, value) in pairs {
            settings.set(&key, value);
        }
        settings.save(&path).unwrap();
        prop_assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
