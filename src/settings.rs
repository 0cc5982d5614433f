//! Viewer settings persistence.
//!
//! Window and export sizes plus the last export directory are remembered
//! across sessions. Plot styling is intentionally absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Initial window size in points
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Size of exported PNG images in pixels
    #[serde(default = "default_export_size")]
    pub export_size: [u32; 2],
    /// Directory of the last successful export
    #[serde(default)]
    pub last_export_dir: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

fn default_window_size() -> [f32; 2] {
    [1280.0, 720.0]
}

fn default_export_size() -> [u32; 2] {
    [1920, 1080]
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            window_size: default_window_size(),
            export_size: default_export_size(),
            last_export_dir: None,
        }
    }
}

impl ViewerSettings {
    /// Get the config directory path for BlockScope
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|p| p.join("blockscope"))
        }
        #[cfg(not(target_os = "linux"))]
        {
            dirs::config_dir().map(|p| p.join("BlockScope"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Parse settings JSON, falling back to defaults when it is unreadable
    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid settings file: {}", e);
            Self::default()
        })
    }

    /// Load settings from disk
    pub fn load() -> Self {
        let Some(path) = Self::get_settings_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&content),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }
}
