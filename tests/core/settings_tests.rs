//! Tests for viewer settings persistence
//!
//! Tests cover:
//! - Default settings values
//! - Serialization/deserialization
//! - Fallbacks for missing fields and invalid files

use std::path::PathBuf;

use blockscope::settings::ViewerSettings;

// ============================================
// Default Settings Tests
// ============================================

#[test]
fn test_settings_default_values() {
    let settings = ViewerSettings::default();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.window_size, [1280.0, 720.0]);
    assert_eq!(settings.export_size, [1920, 1080]);
    assert!(settings.last_export_dir.is_none());
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_settings_roundtrip() {
    let settings = ViewerSettings {
        export_size: [800, 600],
        last_export_dir: Some(PathBuf::from("/tmp/captures")),
        ..Default::default()
    };
    let json = serde_json::to_string_pretty(&settings).unwrap();
    assert_eq!(ViewerSettings::from_json(&json), settings);
}

#[test]
fn test_settings_missing_fields_use_defaults() {
    let settings = ViewerSettings::from_json(r#"{"export_size": [640, 480]}"#);
    assert_eq!(settings.export_size, [640, 480]);
    assert_eq!(settings.version, 1);
    assert_eq!(settings.window_size, [1280.0, 720.0]);
}

#[test]
fn test_settings_invalid_json_falls_back() {
    assert_eq!(
        ViewerSettings::from_json("not json at all"),
        ViewerSettings::default()
    );
}

#[test]
fn test_settings_path_is_json() {
    if let Some(path) = ViewerSettings::get_settings_path() {
        assert_eq!(path.file_name().unwrap(), "settings.json");
    }
}
