//! Player state management.

use wf_core::RoomId;

/// The player's current state in a session.
///
/// The session is the only writer: it keeps `location` pointing at a room
/// that exists, only ever raises the turn counter, and never clears the
/// finished flag once set.
#[derive(Debug, Clone)]
pub struct PlayerState {
    location: RoomId,
    inventory: Vec<String>,
    turns: u32,
    finished: bool,
}

impl PlayerState {
    /// Create a new player state in the given room.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            turns: 0,
            finished: false,
        }
    }

    /// The room the player stands in.
    pub fn location(&self) -> &RoomId {
        &self.location
    }

    /// Carried items, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Number of accepted commands so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// True once the session has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub(crate) fn move_to(&mut self, room: RoomId) {
        self.location = room;
    }

    pub(crate) fn add_item(&mut self, item: String) {
        self.inventory.push(item);
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turns = self.turns.saturating_add(1);
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}
