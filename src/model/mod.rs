//! Flip data model
//!
//! Plain serializable data. Every type here maps one-to-one onto the JSON
//! stored under the history key.

pub mod flip;
pub mod history;
pub mod session;

pub use flip::{Flip, Outcome};
pub use history::History;
pub use session::Session;
