//! Cosmetic random events.
//!
//! Each turn the session may announce that something happens in the
//! background. The roll has its own RNG and never touches game state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::clamp_unit;

/// Message shown when the event roll succeeds.
pub const RANDOM_EVENT_TEXT: &str = "A random event occurs!";

/// Per-turn random event roller.
#[derive(Debug, Clone)]
pub struct RandomEvents {
    rng: StdRng,
    chance: f64,
}

impl RandomEvents {
    /// Create a roller with the given chance (0.0-1.0) and optional seed.
    pub fn new(chance: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            chance: clamp_unit(chance),
        }
    }

    /// Roll for this turn's event.
    pub fn roll(&mut self) -> Option<&'static str> {
        self.rng
            .random_bool(self.chance)
            .then_some(RANDOM_EVENT_TEXT)
    }
}
