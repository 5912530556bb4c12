use std::path::PathBuf;

use crate::room::RoomId;

/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur when loading or querying a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("cannot read map file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The map data is not valid JSON or does not have the room layout.
    #[error("invalid map data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The map defines no rooms at all.
    #[error("map contains no rooms")]
    Empty,

    /// An exit points at a room id that the map does not define.
    #[error("room \"{room}\" has exit \"{direction}\" to unknown room \"{target}\"")]
    DanglingExit {
        /// Room holding the exit.
        room: RoomId,
        /// Direction name of the exit.
        direction: String,
        /// The missing destination.
        target: RoomId,
    },

    /// The requested room id does not exist in the map.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(RoomId),
}
