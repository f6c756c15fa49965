//! A single recorded coin toss

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which face the coin landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "H")]
    Heads,
    #[serde(rename = "T")]
    Tails,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Heads => "Heads",
            Outcome::Tails => "Tails",
        }
    }

    /// Short wire form ("H" / "T")
    pub fn as_code(&self) -> &'static str {
        match self {
            Outcome::Heads => "H",
            Outcome::Tails => "T",
        }
    }

    pub fn is_heads(&self) -> bool {
        *self == Outcome::Heads
    }
}

/// One recorded toss. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    pub result: Outcome,
    /// When the flip was recorded (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Flip {
    /// Create a flip stamped with the current time
    pub fn new(result: Outcome) -> Self {
        Self {
            result,
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a flip without a timestamp
    pub fn untimed(result: Outcome) -> Self {
        Self {
            result,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_wire_codes() {
        assert_eq!(serde_json::to_string(&Outcome::Heads).unwrap(), "\"H\"");
        assert_eq!(serde_json::to_string(&Outcome::Tails).unwrap(), "\"T\"");
        let parsed: Outcome = serde_json::from_str("\"T\"").unwrap();
        assert_eq!(parsed, Outcome::Tails);
    }

    #[test]
    fn test_flip_accepts_browser_date_string() {
        let flip: Flip =
            serde_json::from_str(r#"{"result":"H","timestamp":"2025-03-01T12:30:00.000Z"}"#)
                .unwrap();
        assert_eq!(flip.result, Outcome::Heads);
        assert!(flip.timestamp.is_some());
    }

    #[test]
    fn test_flip_without_timestamp() {
        let flip: Flip = serde_json::from_str(r#"{"result":"T"}"#).unwrap();
        assert_eq!(flip, Flip::untimed(Outcome::Tails));
        assert_eq!(serde_json::to_string(&flip).unwrap(), r#"{"result":"T"}"#);
    }
}
