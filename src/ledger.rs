//! The flip ledger
//!
//! Owns the history, mirrors it to storage after every change and notifies
//! subscribers with fresh stats. All operations are synchronous: by the time a
//! call returns, `stats()` already reflects it.

use crate::coin::new_session_id;
use crate::model::{Flip, History, Outcome, Session};
use crate::persistence::{erase_history, load_history, save_history};
use crate::platform::{Storage, StorageError};
use crate::stats::FlipStats;

/// Handle returned by [`FlipLedger::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FlipStats)>;

/// Single-writer owner of the flip history
pub struct FlipLedger<S: Storage> {
    storage: S,
    history: History,
    ready: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: Storage> FlipLedger<S> {
    /// Create an uninitialized ledger. Call [`initialize`](Self::initialize)
    /// before use.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            history: History::new(),
            ready: false,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Load stored history (empty if missing or corrupt) and open a new
    /// session on top of it.
    pub fn initialize(&mut self) {
        self.history = load_history(&self.storage);
        self.ready = true;
        self.start_new_session();
    }

    /// Whether [`initialize`](Self::initialize) has run
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Record an externally decided outcome on the current session
    pub fn record_flip(&mut self, result: Outcome) {
        if !self.ready {
            // Loading first keeps the stored history from being overwritten
            log::warn!("Flip recorded before initialization, loading history now");
            self.initialize();
        }

        let flip = Flip::new(result);
        let session = self.history.current_or_insert_with(|| {
            log::warn!("No active session, creating one");
            Session::new(new_session_id())
        });

        let streak = session.push(flip);
        log::debug!(
            "Flip {} (streak {}, record {})",
            result.as_code(),
            streak,
            session.record
        );

        self.history.sync_record();
        self.persist();
        self.notify();
    }

    /// Append a fresh empty session; earlier sessions are untouched
    pub fn start_new_session(&mut self) {
        let session = Session::new(new_session_id());
        log::info!("Starting session {}", session.id);
        self.history.push_session(session);
        self.persist();
        self.notify();
    }

    /// Drop every session and remove the stored copy
    pub fn clear_history(&mut self) {
        self.history = History::new();
        match erase_history(&mut self.storage) {
            Ok(()) => log::info!("Flip history cleared"),
            Err(e) => log::warn!("Flip history cleared in memory only: {}", e),
        }
        self.notify();
    }

    /// Write the history now, reporting failure to the caller
    pub fn save(&mut self) -> Result<(), StorageError> {
        save_history(&mut self.storage, &self.history)?;
        log::info!("Flip history saved ({} flips)", self.history.total_flips());
        Ok(())
    }

    /// Register a callback run after every change
    pub fn subscribe(&mut self, callback: impl FnMut(&FlipStats) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&Session> {
        self.history.current()
    }

    pub fn stats(&self) -> FlipStats {
        FlipStats::from_history(&self.history)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Best-effort write; the in-memory history stays authoritative
    fn persist(&mut self) {
        if let Err(e) = save_history(&mut self.storage, &self.history) {
            log::warn!("Could not persist flip history: {}", e);
        }
    }

    fn notify(&mut self) {
        let stats = self.stats();
        for (_, callback) in &mut self.subscribers {
            callback(&stats);
        }
    }
}
