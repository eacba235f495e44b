//! Unit tests for settings module.

use std::fs;

use tempfile::tempdir;
use topodraw::EditorSettings;
use topodraw::settings::{SettingsError, default_settings_path};

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = EditorSettings {
        snap_radius: 14.0,
        jitter: 0.0,
        stroke_color: "#364fc7".to_string(),
        ..EditorSettings::default()
    };
    settings.save(&path).unwrap();

    assert_eq!(EditorSettings::load(&path).unwrap(), settings);
}

#[test]
fn test_file_uses_camel_case_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"hitRadius": 8, "historyLimit": 20}"#).unwrap();

    let settings = EditorSettings::load(&path).unwrap();
    assert_eq!(settings.hit_radius, 8.0);
    assert_eq!(settings.history_limit, 20);
    assert_eq!(settings.snap_radius, 10.0);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"historyLimit": 0}"#).unwrap();

    assert!(matches!(EditorSettings::load(&path), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert_eq!(EditorSettings::load_or_default(&missing), EditorSettings::default());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert_eq!(EditorSettings::load_or_default(&broken), EditorSettings::default());
}

#[test]
fn test_default_path() {
    // Some on most systems
    let path = default_settings_path();
    assert!(path.is_none() || path.unwrap().ends_with("topodraw/settings.json"));
}
