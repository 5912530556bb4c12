//! Core types for Wayfinder: rooms, exits, and the map store.
//!
//! A map is a JSON object keyed by room id. Each room has a name, a
//! description, named exits leading to other rooms, and an optional list of
//! items. The crate is independent of the game engine; you can build a
//! [`GameMap`] programmatically or load one from a file.

/// Error types used throughout the crate.
pub mod error;
/// The room graph loaded from a data file.
pub mod map;
/// Room, exit, and room id types.
pub mod room;

/// Re-export error types.
pub use error::{MapError, MapResult};
/// Re-export the map store.
pub use map::GameMap;
/// Re-export room types.
pub use room::{Exits, Room, RoomId};
