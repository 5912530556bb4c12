use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Identifier of a room in the map.
///
/// Data files may spell ids as JSON integers or strings. Both forms
/// normalize to the same text, so a key `"2"` and an exit target `2` name
/// the same room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// Create a room id from any textual or numeric key.
    pub fn new(id: impl ToString) -> Self {
        Self(id.to_string())
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

struct RoomIdVisitor;

impl Visitor<'_> for RoomIdVisitor {
    type Value = RoomId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a room id (string or integer)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RoomId, E> {
        Ok(RoomId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RoomId, E> {
        Ok(RoomId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RoomId, E> {
        Ok(RoomId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RoomId, E> {
        Ok(RoomId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RoomIdVisitor)
    }
}

/// The exits of a room: direction name to destination, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exits(Vec<(String, RoomId)>);

impl Exits {
    /// Build exits from `(direction, destination)` pairs.
    ///
    /// A repeated direction keeps its first position and takes the last
    /// destination, matching how JSON objects with duplicate keys load.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, RoomId)>,
        S: Into<String>,
    {
        let mut exits = Self::default();
        for (direction, target) in pairs {
            exits.insert(direction.into(), target);
        }
        exits
    }

    fn insert(&mut self, direction: String, target: RoomId) {
        match self.0.iter_mut().find(|(d, _)| *d == direction) {
            Some(slot) => slot.1 = target,
            None => self.0.push((direction, target)),
        }
    }

    /// Destination for an exact direction name.
    pub fn get(&self, direction: &str) -> Option<&RoomId> {
        self.0
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, target)| target)
    }

    /// Direction names in document order.
    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(d, _)| d.as_str())
    }

    /// `(direction, destination)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.0.iter().map(|(d, target)| (d.as_str(), target))
    }

    /// Number of exits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the room has no way out.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct ExitsVisitor;

impl<'de> Visitor<'de> for ExitsVisitor {
    type Value = Exits;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from direction name to room id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Exits, A::Error> {
        let mut exits = Exits::default();
        while let Some((direction, target)) = access.next_entry::<String, RoomId>()? {
            exits.insert(direction, target);
        }
        Ok(exits)
    }
}

impl<'de> Deserialize<'de> for Exits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExitsVisitor)
    }
}

/// A single room of the map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Description shown when the room is displayed.
    pub desc: String,
    /// Ways out of the room.
    pub exits: Exits,
    /// Items lying in the room, in display order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Room {
    /// Create an empty room with a name and description.
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            exits: Exits::default(),
            items: Vec::new(),
        }
    }

    /// Set the exits.
    pub fn with_exits(mut self, exits: Exits) -> Self {
        self.exits = exits;
        self
    }

    /// Add an item to the room.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Remove the first item with exactly this name.
    ///
    /// Returns the removed name, or `None` when the room has no such item.
    pub fn take_item(&mut self, item: &str) -> Option<String> {
        let pos = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(pos))
    }
}
