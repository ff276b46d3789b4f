//! Editor preferences persisted between runs

mod file;

pub use file::*;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use worldbuilder_autotile::OrientationConfig;

use crate::session::SessionConfig;

/// Maximum number of entries kept in the recent worlds list
pub const MAX_RECENT_WORLDS: usize = 10;

/// A recently opened or saved world file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentWorld {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct EditorPreferences {
    /// Re-orient tiles automatically while painting
    #[serde(default = "default_auto_orientation")]
    pub auto_orientation: bool,
    /// Tile-set group layout
    #[serde(default)]
    pub orientation: OrientationConfig,
    /// Most recent first
    #[serde(default)]
    pub recent_worlds: Vec<RecentWorld>,
}

fn default_auto_orientation() -> bool {
    true
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            auto_orientation: default_auto_orientation(),
            orientation: OrientationConfig::default(),
            recent_worlds: Vec::new(),
        }
    }
}

impl EditorPreferences {
    /// Session settings derived from these preferences
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            auto_orientation: self.auto_orientation,
            orientation: self.orientation,
        }
    }

    /// Move a world to the front of the recent list
    pub fn add_recent_world(&mut self, path: PathBuf) {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        self.recent_worlds.retain(|w| w.path != path);
        self.recent_worlds.insert(0, RecentWorld { path, name });
        self.recent_worlds.truncate(MAX_RECENT_WORLDS);
    }

    /// Drop a world from the recent list (e.g. after it failed to open)
    pub fn remove_recent_world(&mut self, path: &Path) {
        self.recent_worlds.retain(|w| w.path != path);
    }
}
