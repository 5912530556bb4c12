use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MapError, MapResult};
use crate::room::{Room, RoomId};

/// The room graph. Owns every room, keyed by id.
///
/// Room ids and exits are fixed once the map is built; only the item lists
/// inside rooms change during play.
#[derive(Debug, Clone)]
pub struct GameMap {
    rooms: HashMap<RoomId, Room>,
}

impl GameMap {
    /// Build a map from rooms, validating that every exit leads somewhere.
    pub fn new(rooms: HashMap<RoomId, Room>) -> MapResult<Self> {
        let map = Self { rooms };
        map.validate()?;
        Ok(map)
    }

    /// Parse a map from JSON text.
    pub fn from_json(source: &str) -> MapResult<Self> {
        let rooms: HashMap<RoomId, Room> = serde_json::from_str(source)?;
        Self::new(rooms)
    }

    /// Read and parse a map file. The file is closed before this returns.
    pub fn load(path: &Path) -> MapResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json(&source)?;
        tracing::info!(
            path = %path.display(),
            rooms = map.room_count(),
            "loaded map"
        );
        Ok(map)
    }

    fn validate(&self) -> MapResult<()> {
        if self.rooms.is_empty() {
            return Err(MapError::Empty);
        }

        // Sorted so the reported error does not depend on hash order.
        for id in self.room_ids() {
            let room = &self.rooms[id];
            for (direction, target) in room.exits.iter() {
                if !self.contains(target) {
                    return Err(MapError::DanglingExit {
                        room: id.clone(),
                        direction: direction.to_string(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Get a room by id.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a mutable room by id, for item changes.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Get a room by id, or a `RoomNotFound` error.
    pub fn require(&self, id: &RoomId) -> MapResult<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| MapError::RoomNotFound(id.clone()))
    }

    /// True if the map defines this room id.
    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    /// Find the id of the first room (by id order) with this display name.
    pub fn find_by_name(&self, name: &str) -> Option<&RoomId> {
        self.room_ids()
            .into_iter()
            .find(|id| self.rooms[*id].name == name)
    }

    /// All room ids, sorted.
    pub fn room_ids(&self) -> Vec<&RoomId> {
        let mut ids: Vec<_> = self.rooms.keys().collect();
        ids.sort();
        ids
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::room::Exits;

    const CASTLE: &str = r#"{
        "0": {
            "name": "Gatehouse",
            "desc": "A portcullis hangs overhead.",
            "exits": {"north": 1, "east": "2"}
        },
        "1": {
            "name": "Courtyard",
            "desc": "Weeds push through the flagstones.",
            "exits": {"south": 0},
            "items": ["key", "lantern"]
        },
        "2": {
            "name": "Boss Room",
            "desc": "Something large breathes in the dark.",
            "exits": {"west": 0}
        }
    }"#;

    #[test]
    fn parse_map() {
        let map = GameMap::from_json(CASTLE).unwrap();
        assert_eq!(map.room_count(), 3);

        let gate = map.room(&RoomId::new(0)).unwrap();
        assert_eq!(gate.name, "Gatehouse");
        assert_eq!(gate.exits.get("north"), Some(&RoomId::new(1)));
        assert_eq!(gate.exits.get("east"), Some(&RoomId::new(2)));

        let yard = map.room(&RoomId::new(1)).unwrap();
        assert_eq!(yard.items, vec!["key".to_string(), "lantern".to_string()]);
    }

    #[test]
    fn dangling_exit_rejected() {
        let source = r#"{"0": {"name": "Cell", "desc": "Damp.", "exits": {"down": 9}}}"#;
        let err = GameMap::from_json(source).unwrap_err();
        match err {
            MapError::DanglingExit {
                room,
                direction,
                target,
            } => {
                assert_eq!(room, RoomId::new(0));
                assert_eq!(direction, "down");
                assert_eq!(target, RoomId::new(9));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_map_rejected() {
        assert!(matches!(GameMap::from_json("{}"), Err(MapError::Empty)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            GameMap::from_json("{\"0\": {\"name\": 3}}"),
            Err(MapError::Parse(_))
        ));
        assert!(matches!(
            GameMap::from_json("not json"),
            Err(MapError::Parse(_))
        ));
    }

    #[test]
    fn build_programmatically() {
        let mut rooms = HashMap::new();
        rooms.insert(
            RoomId::from("hall"),
            Room::new("Hall", "Long and narrow.")
                .with_exits(Exits::new([("out", RoomId::from("yard"))])),
        );
        rooms.insert(RoomId::from("yard"), Room::new("Yard", "Open sky."));

        let map = GameMap::new(rooms).unwrap();
        assert!(map.contains(&RoomId::from("yard")));
        assert_eq!(map.find_by_name("Hall"), Some(&RoomId::from("hall")));
        assert_eq!(map.find_by_name("Cellar"), None);
    }

    #[test]
    fn require_reports_missing_room() {
        let map = GameMap::from_json(CASTLE).unwrap();
        assert!(map.require(&RoomId::new(1)).is_ok());
        assert!(matches!(
            map.require(&RoomId::new(7)),
            Err(MapError::RoomNotFound(_))
        ));
    }

    #[test]
    fn room_mut_changes_items() {
        let mut map = GameMap::from_json(CASTLE).unwrap();
        let yard = map.room_mut(&RoomId::new(1)).unwrap();
        assert_eq!(yard.take_item("key"), Some("key".to_string()));
        assert_eq!(map.room(&RoomId::new(1)).unwrap().items, vec!["lantern"]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CASTLE.as_bytes()).unwrap();

        let map = GameMap::load(file.path()).unwrap();
        assert_eq!(map.room_ids(), vec![&RoomId::new(0), &RoomId::new(1), &RoomId::new(2)]);
    }

    #[test]
    fn load_missing_file() {
        let err = GameMap::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    mod properties {
        use proptest::prelude::*;

        use crate::map::GameMap;
        use crate::room::RoomId;

        proptest! {
            #[test]
            fn numeric_and_text_ids_agree(n in 0u32..10_000) {
                let source = format!(
                    r#"{{"{n}": {{"name": "A", "desc": "a", "exits": {{"loop": {n}}}}}}}"#
                );
                let map = GameMap::from_json(&source).unwrap();
                let room = map.room(&RoomId::new(n)).unwrap();
                prop_assert_eq!(room.exits.get("loop"), Some(&RoomId::new(n)));
            }
        }
    }
}
