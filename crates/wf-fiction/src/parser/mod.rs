//! Command parsing and fuzzy vocabulary resolution.

mod command;
mod resolver;

pub use command::{Command, Verb, parse_command};
pub use resolver::{FUZZY_THRESHOLD, closest_match, resolve_direction, resolve_item};
