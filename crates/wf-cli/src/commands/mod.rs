pub mod play;

use std::path::Path;

use wf_core::GameMap;

/// Load a map file, turning any failure into a message for the user.
fn load_map(path: &Path) -> Result<GameMap, String> {
    GameMap::load(path).map_err(|e| e.to_string())
}
