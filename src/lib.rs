//! Coin Flip - a coin toss toy with streak statistics
//!
//! Core modules:
//! - `model`: Flips, sessions and the stored history
//! - `ledger`: Single owner of the history (record, reset, clear, subscribe)
//! - `stats`: Counters shown next to the coin
//! - `charts`: Series for the bias, outcome and streak charts
//! - `coin`: Seeded fair coin used by the flip animation
//! - `platform`: Browser/native storage abstraction
//! - `persistence`: JSON save/load of the history
//! - `settings`: User preferences

pub mod charts;
pub mod coin;
pub mod ledger;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod stats;

pub use coin::Coin;
pub use ledger::{FlipLedger, SubscriptionId};
pub use model::{Flip, History, Outcome, Session};
pub use settings::Settings;
pub use stats::FlipStats;
