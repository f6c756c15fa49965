//! Sessions: one continuous period of flipping

use serde::{Deserialize, Serialize};

use super::flip::{Flip, Outcome};

/// Append-only run of flips with its best heads streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique identifier
    pub id: String,
    /// Chronological, append-only
    #[serde(default)]
    pub flips: Vec<Flip>,
    /// Longest heads run reached so far (never decreases)
    #[serde(default)]
    pub record: u32,
}

impl Session {
    /// Create an empty session
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            flips: Vec::new(),
            record: 0,
        }
    }

    /// Append a flip and raise the record if the trailing run beats it.
    /// Returns the trailing heads streak after the append.
    pub fn push(&mut self, flip: Flip) -> u32 {
        self.flips.push(flip);
        let streak = self.trailing_streak();
        if streak > self.record {
            self.record = streak;
        }
        streak
    }

    /// Consecutive heads ending at the most recent flip
    pub fn trailing_streak(&self) -> u32 {
        self.flips
            .iter()
            .rev()
            .take_while(|f| f.result.is_heads())
            .count() as u32
    }

    /// Longest heads run anywhere in the session's flips
    pub fn longest_streak(&self) -> u32 {
        let mut best = 0;
        let mut run = 0;
        for flip in &self.flips {
            if flip.result.is_heads() {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    /// Bring `record` up to the longest run actually present.
    ///
    /// Stored sessions written by older builds may carry a stale record.
    pub fn repair_record(&mut self) {
        self.record = self.record.max(self.longest_streak());
    }

    pub fn len(&self) -> usize {
        self.flips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    /// Most recent flip (if any)
    pub fn last(&self) -> Option<&Flip> {
        self.flips.last()
    }

    /// Up to `n` most recent flips, oldest first
    pub fn recent(&self, n: usize) -> &[Flip] {
        &self.flips[self.flips.len().saturating_sub(n)..]
    }

    /// Number of flips with the given outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        self.flips.iter().filter(|f| f.result == outcome).count()
    }
}
