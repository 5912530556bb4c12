//! Error types for the fiction engine.
//!
//! Every in-game variant renders as the message the player sees; the
//! session turns them into rejected replies instead of propagating them.

use thiserror::Error;
use wf_core::MapError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during a text adventure session.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The input line held no words.
    #[error("Sorry, you need to enter a command.")]
    EmptyCommand,

    /// The first word matched no verb.
    #[error("Sorry, '{0}' is not a valid command.")]
    UnknownCommand(String),

    /// `go` without a usable direction.
    #[error("Please specify a valid direction.")]
    NoDirection,

    /// No exit starts with the given direction.
    #[error("There's no way to go {0}.")]
    NoWay(String),

    /// Several exits start with the given direction.
    #[error("Did you want to go {}?", .0.join(" or "))]
    AmbiguousDirection(Vec<String>),

    /// `get` without naming anything.
    #[error("There's nothing like that here.")]
    NothingToGet,

    /// The named item is not in the current room.
    #[error("There's no {0} anywhere.")]
    NoSuchItem(String),

    /// Input arrived after the session ended.
    #[error("The game is over.")]
    GameOver,

    /// The map could not serve the session.
    #[error("{0}")]
    Map(#[from] MapError),
}
