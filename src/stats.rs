//! Derived statistics shown next to the coin

use serde::Serialize;

use crate::model::History;

/// Read-only snapshot of the counters. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipStats {
    /// Flips in the current session
    pub current_flips: usize,
    /// Best heads run this session (the session record)
    pub current_streak: u32,
    /// Heads run ending at the latest flip
    pub active_streak: u32,
    /// Flips across every session
    pub history_flips: usize,
    /// Best session record ever
    pub history_streak: u32,
}

impl FlipStats {
    pub fn from_history(history: &History) -> Self {
        let (current_flips, current_streak, active_streak) = history
            .current()
            .map(|s| (s.len(), s.record, s.trailing_streak()))
            .unwrap_or((0, 0, 0));

        Self {
            current_flips,
            current_streak,
            active_streak,
            history_flips: history.total_flips(),
            history_streak: history.best_streak(),
        }
    }
}
