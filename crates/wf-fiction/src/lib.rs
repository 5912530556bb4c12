//! Text adventure engine for Wayfinder.
//!
//! Provides a single-player session over a room map loaded by `wf-core`.
//! Player input is parsed into commands whose verbs, directions, and item
//! names are fuzzy-matched against the vocabulary of the current room. Win
//! and lose goals are pluggable and checked after every accepted command.

/// Win and lose goals.
pub mod condition;
/// Session configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Cosmetic per-turn random events.
pub mod events;
/// Command parsing and fuzzy vocabulary resolution.
pub mod parser;
/// Player state management.
pub mod player;
/// Text adventure session management.
pub mod session;

pub use condition::{Condition, Goal};
pub use config::SessionConfig;
pub use error::{FictionError, FictionResult};
pub use events::RandomEvents;
pub use parser::{Command, Verb, closest_match, parse_command};
pub use player::PlayerState;
pub use session::{Ending, FictionSession, Outcome, Reply, describe_room};
