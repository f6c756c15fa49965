//! Save/load of the flip history
//!
//! Features:
//! - Plain JSON under a single fixed key
//! - Corrupt or incompatible data degrades to an empty history
//! - Stale session records are repaired on load

use crate::model::History;
use crate::platform::{Storage, StorageError};

/// Storage key for the serialized history
pub const HISTORY_KEY: &str = "flipHistory";

/// Parse a stored history blob. Anything unparseable yields an empty history.
pub fn decode_history(json: &str) -> History {
    match serde_json::from_str::<History>(json) {
        Ok(mut history) => {
            history.repair();
            history
        }
        Err(e) => {
            log::info!("Discarding unreadable flip history: {}", e);
            History::new()
        }
    }
}

/// Serialize a history to its stored form
pub fn encode_history(history: &History) -> Result<String, StorageError> {
    Ok(serde_json::to_string(history)?)
}

/// Load the history from storage, or an empty one if absent/unreadable
pub fn load_history(storage: &impl Storage) -> History {
    match storage.get_item(HISTORY_KEY) {
        Ok(Some(json)) => {
            let history = decode_history(&json);
            log::info!(
                "Loaded flip history ({} sessions, {} flips)",
                history.sessions.len(),
                history.total_flips()
            );
            history
        }
        Ok(None) => {
            log::info!("No flip history found, starting fresh");
            History::new()
        }
        Err(e) => {
            log::warn!("Could not read flip history: {}", e);
            History::new()
        }
    }
}

/// Write the full history under [`HISTORY_KEY`]
pub fn save_history(storage: &mut impl Storage, history: &History) -> Result<(), StorageError> {
    let json = encode_history(history)?;
    storage.set_item(HISTORY_KEY, &json)
}

/// Remove the stored history entirely
pub fn erase_history(storage: &mut impl Storage) -> Result<(), StorageError> {
    storage.remove_item(HISTORY_KEY)
}
