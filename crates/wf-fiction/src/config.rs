//! Configuration for a text adventure session.

use wf_core::RoomId;

use crate::parser::FUZZY_THRESHOLD;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Room the player starts in.
    pub start_room: RoomId,
    /// Minimum similarity for fuzzy matching of verbs, exits, and items.
    pub match_threshold: f64,
    /// Chance per turn of the cosmetic random event line.
    pub event_chance: f64,
    /// RNG seed for the random event roll. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_room: RoomId::new(0),
            match_threshold: FUZZY_THRESHOLD,
            event_chance: 0.2,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the starting room.
    pub fn with_start_room(mut self, room: RoomId) -> Self {
        self.start_room = room;
        self
    }

    /// Set the fuzzy matching threshold (clamped to 0.0-1.0).
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = clamp_unit(threshold);
        self
    }

    /// Set the random event chance (clamped to 0.0-1.0).
    pub fn with_event_chance(mut self, chance: f64) -> Self {
        self.event_chance = clamp_unit(chance);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Clamp a probability-like value to 0.0-1.0, mapping NaN to 0.0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
