//! Application configuration
//!
//! Loaded from `macrodeck.toml` at startup, falls back to defaults if the
//! file is missing or cannot be parsed.

use macrodeck_core::{MacroDefaults, DEFAULT_HOTKEY};
use macrodeck_session::SessionSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "macrodeck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values that seed newly created macros.
    pub preferences: PreferencesConfig,
    /// Session bootstrap tunables.
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub allow_owner_edits_default: bool,
    pub default_hotkey: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            allow_owner_edits_default: true,
            default_hotkey: DEFAULT_HOTKEY.into(),
        }
    }
}

impl PreferencesConfig {
    pub fn macro_defaults(&self) -> MacroDefaults {
        MacroDefaults {
            allow_owner_edits: self.allow_owner_edits_default,
            hotkey: self.default_hotkey.clone(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// The config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
