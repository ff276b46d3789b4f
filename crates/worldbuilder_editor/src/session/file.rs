//! World file save/load operations

use super::{EditSession, SessionConfig};
use std::path::Path;
use worldbuilder_core::{WorldDataError, WorldGrid};

#[derive(Debug, Clone, PartialEq)]
pub enum WorldFileError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    NoPath,
}

impl std::fmt::Display for WorldFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldFileError::IoError(e) => write!(f, "IO error: {}", e),
            WorldFileError::ParseError(e) => write!(f, "Parse error: {}", e),
            WorldFileError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            WorldFileError::NoPath => write!(f, "No file path set"),
        }
    }
}

impl std::error::Error for WorldFileError {}

impl From<WorldDataError> for WorldFileError {
    fn from(e: WorldDataError) -> Self {
        match e {
            WorldDataError::Parse(msg) => WorldFileError::ParseError(msg),
            WorldDataError::Serialize(msg) => WorldFileError::SerializeError(msg),
        }
    }
}

/// Read a world grid from a JSON file
pub fn load_world(path: &Path) -> Result<WorldGrid, WorldFileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| WorldFileError::IoError(e.to_string()))?;
    let grid = WorldGrid::from_json_str(&content)?;
    bevy::log::info!("Loaded world from {:?} ({} tiles)", path, grid.len());
    Ok(grid)
}

/// Write a world grid to a JSON file
pub fn save_world(grid: &WorldGrid, path: &Path) -> Result<(), WorldFileError> {
    let content = grid.to_json_string()?;
    std::fs::write(path, content).map_err(|e| WorldFileError::IoError(e.to_string()))?;
    bevy::log::info!("Saved world to {:?} ({} tiles)", path, grid.len());
    Ok(())
}

impl EditSession {
    /// Open a world file in a fresh session
    pub fn open(path: &Path, config: SessionConfig) -> Result<Self, WorldFileError> {
        let grid = load_world(path)?;
        let mut session = Self::with_grid(grid, config);
        session.path = Some(path.to_path_buf());
        Ok(session)
    }

    /// Replace the current world with the contents of a file.
    ///
    /// On failure the session is left exactly as it was. On success the
    /// history is cleared, since it belongs to the previous world.
    pub fn reload(&mut self, path: &Path) -> Result<(), WorldFileError> {
        let grid = load_world(path)?;
        self.last_saved = grid.clone();
        self.grid = grid;
        self.history.clear();
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save the world to a file.
    ///
    /// On failure the saved marker and path are unchanged so the save can be retried.
    pub fn save(&mut self, path: &Path) -> Result<(), WorldFileError> {
        save_world(&self.grid, path)?;
        self.path = Some(path.to_path_buf());
        self.mark_saved();
        Ok(())
    }

    /// Save to current path if set
    pub fn save_current(&mut self) -> Result<(), WorldFileError> {
        if let Some(path) = self.path.clone() {
            self.save(&path)
        } else {
            Err(WorldFileError::NoPath)
        }
    }
}
