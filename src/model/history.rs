//! All sessions recorded in this browser

use serde::{Deserialize, Serialize};

use super::session::Session;

/// Durable collection of sessions. The last session is the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    /// Creation order
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Best record across all sessions, mirrored on every write
    #[serde(default)]
    pub record: u32,
}

impl History {
    /// Empty history (no sessions, record 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session
    pub fn current(&self) -> Option<&Session> {
        self.sessions.last()
    }

    /// The active session, creating one first if there is none
    pub fn current_or_insert_with(&mut self, make: impl FnOnce() -> Session) -> &mut Session {
        if self.sessions.is_empty() {
            self.sessions.push(make());
        }
        let last = self.sessions.len() - 1;
        &mut self.sessions[last]
    }

    /// Append a session; it becomes the current one
    pub fn push_session(&mut self, session: Session) {
        self.sessions.push(session);
        self.sync_record();
    }

    /// Sum of flips over every session
    pub fn total_flips(&self) -> usize {
        self.sessions.iter().map(Session::len).sum()
    }

    /// Highest session record (0 when there are no sessions)
    pub fn best_streak(&self) -> u32 {
        self.sessions.iter().map(|s| s.record).max().unwrap_or(0)
    }

    /// Refresh the aggregate `record` from the sessions
    pub fn sync_record(&mut self) {
        self.record = self.best_streak();
    }

    /// Fix up stale records after loading
    pub fn repair(&mut self) {
        for session in &mut self.sessions {
            session.repair_record();
        }
        self.sync_record();
    }
}
