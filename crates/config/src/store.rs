// Settings persistence
// Stored at ~/.config/pulseviz/settings.json

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use pulseviz_settings::NumberSettings;

use crate::projection::{apply_projection, visible_projection};

/// Reads and writes the visible-field projection of a descriptor.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default config location.
    pub fn default_location() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pulseviz");
        Self::new(config_dir.join("settings.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Applies stored values onto the descriptor. A missing file is not
    /// an error; unreadable or unparsable contents fall back to leaving
    /// the descriptor untouched.
    pub fn load_into(&self, settings: &mut NumberSettings) {
        if !self.path.exists() {
            return;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error reading {}: {}", self.path.display(), e);
                return;
            }
        };

        // Strip comments (lines starting with //)
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        match serde_json::from_str::<Map<String, Value>>(&cleaned) {
            Ok(map) => apply_projection(settings, &map),
            Err(e) => {
                eprintln!("Error parsing {}: {}", self.path.display(), e);
                eprintln!("Keeping current settings");
            }
        }
    }

    /// Writes the visible fields as pretty-printed JSON.
    pub fn save(&self, settings: &NumberSettings) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let map = visible_projection(settings);
        let json = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| e.to_string())?;

        fs::write(&self.path, json).map_err(|e| e.to_string())
    }
}
