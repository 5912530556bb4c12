//! Command parsing for player input.

use super::resolver::closest_match;

/// The fixed verb vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Pick up an item.
    Get,
    /// Describe the current room again.
    Look,
    /// List carried items.
    Inventory,
    /// End the session.
    Quit,
    /// List the verbs.
    Help,
}

impl Verb {
    /// Every verb, in the order help lists them.
    pub const ALL: [Verb; 6] = [
        Self::Go,
        Self::Get,
        Self::Look,
        Self::Inventory,
        Self::Quit,
        Self::Help,
    ];

    /// The word the player types for this verb.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Get => "get",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Quit => "quit",
            Self::Help => "help",
        }
    }

    /// Fuzzy-resolve a word to a verb.
    pub fn resolve(word: &str, threshold: f64) -> Option<Self> {
        let name = closest_match(word, Self::ALL.iter().map(Verb::name), threshold)?;
        Self::ALL.into_iter().find(|verb| verb.name() == name)
    }
}

/// A parsed player command.
///
/// Arguments are the raw words typed; they are matched against the room's
/// exits and items when the command runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The line held no words.
    Empty,
    /// The first word matched no verb.
    Unknown {
        /// The unrecognized word.
        word: String,
    },
    /// Move through an exit.
    Go {
        /// The direction word, empty when none was typed.
        direction: String,
    },
    /// Pick up an item.
    Get {
        /// The item word, empty when none was typed.
        item: String,
        /// Every word after the verb, for multi-word item names.
        phrase: String,
    },
    /// Describe the current room.
    Look,
    /// List inventory.
    Inventory,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
}

/// Parse a player input line into a command.
///
/// Input is lowercased and split on whitespace. `go` and `get` take the
/// second word as their argument; `get` also keeps the rest of the line so
/// multi-word item names can be typed in full.
pub fn parse_command(input: &str, threshold: f64) -> Command {
    let lower = input.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Command::Empty;
    };
    let rest = &words[1..];

    match Verb::resolve(first, threshold) {
        Some(Verb::Go) => Command::Go {
            direction: rest.first().map(|w| w.to_string()).unwrap_or_default(),
        },
        Some(Verb::Get) => Command::Get {
            item: rest.first().map(|w| w.to_string()).unwrap_or_default(),
            phrase: rest.join(" "),
        },
        Some(Verb::Look) => Command::Look,
        Some(Verb::Inventory) => Command::Inventory,
        Some(Verb::Help) => Command::Help,
        Some(Verb::Quit) => Command::Quit,
        None => Command::Unknown {
            word: first.to_string(),
        },
    }
}
