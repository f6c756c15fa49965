//! Fair coin with a reproducible RNG
//!
//! The ledger never samples outcomes itself; the flip animation asks a `Coin`
//! for the result and reports it. Seeding makes test runs repeatable.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::model::Outcome;

/// Seeded coin. Each toss is an independent 50/50 draw.
#[derive(Debug, Clone)]
pub struct Coin {
    seed: u64,
    rng: Pcg32,
}

impl Coin {
    /// Create a coin with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a coin seeded from the OS / browser entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Toss the coin
    pub fn toss(&mut self) -> Outcome {
        if self.rng.random_bool(0.5) {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }

}

/// Fresh random session id (UUID v4 layout)
pub fn new_session_id() -> String {
    uuid::Builder::from_random_bytes(rand::random())
        .into_uuid()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Coin::new(42);
        let mut b = Coin::new(42);
        let seq_a: Vec<_> = (0..64).map(|_| a.toss()).collect();
        let seq_b: Vec<_> = (0..64).map(|_| b.toss()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_roughly_fair() {
        let mut coin = Coin::new(7);
        let heads = (0..10_000).filter(|_| coin.toss().is_heads()).count();
        // Far outside this band would mean a biased coin
        assert!((4_500..=5_500).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_session_ids_are_uuids() {
        let id = new_session_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(new_session_id(), id);
    }

    proptest! {
        #[test]
        fn prop_seed_fixes_tosses(seed in any::<u64>(), n in 1usize..64) {
            let mut a = Coin::new(seed);
            let mut b = Coin::new(seed);
            for _ in 0..n {
                prop_assert_eq!(a.toss(), b.toss());
            }
            prop_assert_eq!(a.seed(), seed);
        }
    }
}
