//! User preferences
//!
//! Persisted separately from the flip history under their own storage key.

use serde::{Deserialize, Serialize};

use crate::platform::{Storage, StorageError};

/// Length of the full flip animation (rise, spin, land)
pub const FLIP_DURATION_MS: u32 = 750;

/// Coin flip settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Skip the flip animation and show results immediately
    pub reduced_motion: bool,

    /// Ask before wiping the history
    pub confirm_clear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            confirm_clear: true,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flipSettings";

    /// How long the coin animates before the result is recorded
    pub fn flip_duration_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            FLIP_DURATION_MS
        }
    }

    /// Load settings, falling back to defaults if missing or unreadable
    pub fn load(storage: &impl Storage) -> Self {
        if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings from storage");
                return settings;
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings
    pub fn save(&self, storage: &mut impl Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
