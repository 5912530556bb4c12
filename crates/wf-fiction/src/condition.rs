//! Win and lose conditions.
//!
//! A session checks its goals after every command: the win goal first,
//! then the lose goal. A goal only reads state.

use wf_core::GameMap;

use crate::player::PlayerState;

/// Something that can be evaluated against the game state.
pub trait Goal {
    /// True when the goal is met.
    fn evaluate(&self, map: &GameMap, player: &PlayerState) -> bool;
}

impl<F> Goal for F
where
    F: Fn(&GameMap, &PlayerState) -> bool,
{
    fn evaluate(&self, map: &GameMap, player: &PlayerState) -> bool {
        self(map, player)
    }
}

/// A data-driven condition on the player and map.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Condition {
    /// Check if the player carries an item.
    HasItem {
        /// Item name.
        item: String,
    },
    /// Check if the player stands in a room with this display name.
    InRoom {
        /// Room name.
        name: String,
    },
    /// Check if the player has taken at least this many turns.
    TurnsAtLeast(u32),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    Always,
    /// Always false.
    #[default]
    Never,
}

impl Condition {
    /// The player carries `item`.
    pub fn holding(item: impl Into<String>) -> Self {
        Self::HasItem { item: item.into() }
    }

    /// The player stands in a room named `name`.
    pub fn in_room(name: impl Into<String>) -> Self {
        Self::InRoom { name: name.into() }
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Combine with another condition; both must hold.
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::And(mut all) => {
                all.push(other);
                Self::And(all)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, map: &GameMap, player: &PlayerState) -> bool {
        match self {
            Condition::HasItem { item } => player.has_item(item),
            Condition::InRoom { name } => map
                .room(player.location())
                .is_some_and(|room| room.name == *name),
            Condition::TurnsAtLeast(turns) => player.turns() >= *turns,
            Condition::Not(inner) => !inner.evaluate(map, player),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(map, player)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(map, player)),
            Condition::Always => true,
            Condition::Never => false,
        }
    }
}

impl Goal for Condition {
    fn evaluate(&self, map: &GameMap, player: &PlayerState) -> bool {
        Condition::evaluate(self, map, player)
    }
}
