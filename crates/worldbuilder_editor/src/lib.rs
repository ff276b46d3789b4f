//! worldbuilder_editor - Editing engine for layered tile worlds
//!
//! This crate provides everything an editor front end needs besides drawing:
//! - Edit sessions with paint/erase/sample on three tile layers
//! - Automatic tile orientation after every edit
//! - Snapshot-based undo/redo
//! - Staged world import with nudging, preview and merge
//! - World file save/load and persisted preferences
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use worldbuilder_editor::WorldBuilderPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(WorldBuilderPlugin::new().with_world("levels/cave.json"))
//!         .run();
//! }
//! ```
//!
//! The front end reads [`EditSession`] and [`ImportStaging`] every frame to
//! draw the world and the import preview, and requests edits by setting
//! [`EditorState::pending_action`].

pub mod commands;
pub mod import;
pub mod preferences;
pub mod session;

// Re-export core types from worldbuilder_* crates
pub use worldbuilder_autotile;
pub use worldbuilder_core;

pub use commands::SnapshotHistory;
pub use import::{ImportStaging, StagedImport};
pub use preferences::{EditorPreferences, PreferencesError, RecentWorld};
pub use session::{
    load_world, save_world, EditSession, LayerSelection, SessionConfig, WorldFileError,
};

use bevy::prelude::*;
use std::path::PathBuf;

/// Requests from the front end, applied once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Paint the current brush at a tile coordinate
    Paint(i32, i32),
    /// Clear a tile coordinate
    Erase(i32, i32),
    /// Copy the block and liquid layers of a tile into the brush
    Sample(i32, i32),
    Undo,
    Redo,
    Save(PathBuf),
    Open(PathBuf),
    /// Load a world file into import staging
    Import(PathBuf),
    NudgeImport(i32, i32),
    CommitImport,
    CancelImport,
    ToggleAutoOrientation,
}

/// Front-end facing editor state
#[derive(Resource, Default)]
pub struct EditorState {
    /// Layer indices applied by [`PendingAction::Paint`]
    pub brush: LayerSelection,
    pub pending_action: Option<PendingAction>,
    /// Last error to show to the user
    pub error_message: Option<String>,
    /// World path to add to the recent list
    pub pending_add_recent_world: Option<PathBuf>,
    /// World path to drop from the recent list
    pub pending_remove_recent_world: Option<PathBuf>,
}

/// Apply a single action to the editor resources
pub fn apply_action(
    action: PendingAction,
    editor_state: &mut EditorState,
    session: &mut EditSession,
    staging: &mut ImportStaging,
) {
    match action {
        PendingAction::Paint(col, row) => {
            session.paint(col, row, editor_state.brush);
        }
        PendingAction::Erase(col, row) => {
            session.erase(col, row);
        }
        PendingAction::Sample(col, row) => {
            if let Some(tile) = session.probe(col, row) {
                editor_state.brush.absorb(LayerSelection::sampled(&tile));
            }
        }
        PendingAction::Undo => {
            session.undo();
        }
        PendingAction::Redo => {
            session.redo();
        }
        PendingAction::Save(path) => match session.save(&path) {
            Ok(()) => editor_state.pending_add_recent_world = Some(path),
            Err(e) => {
                bevy::log::error!("Failed to save world: {}", e);
                editor_state.error_message = Some(format!("Failed to save world: {}", e));
            }
        },
        PendingAction::Open(path) => match session.reload(&path) {
            Ok(()) => {
                staging.cancel();
                editor_state.pending_add_recent_world = Some(path);
            }
            Err(e) => {
                bevy::log::error!("Failed to load world: {}", e);
                editor_state.error_message = Some(format!("Failed to load world: {}", e));
                editor_state.pending_remove_recent_world = Some(path);
            }
        },
        PendingAction::Import(path) => {
            if let Err(e) = staging.load(&path) {
                bevy::log::error!("Failed to import world: {}", e);
                editor_state.error_message = Some(format!("Failed to import world: {}", e));
            }
        }
        PendingAction::NudgeImport(dx, dy) => {
            staging.nudge(dx, dy);
        }
        PendingAction::CommitImport => {
            session.commit_import(staging);
        }
        PendingAction::CancelImport => {
            staging.cancel();
        }
        PendingAction::ToggleAutoOrientation => {
            let enabled = session.toggle_auto_orientation();
            bevy::log::info!("Auto orientation {}", if enabled { "on" } else { "off" });
        }
    }
}

/// System draining [`EditorState::pending_action`]
pub fn process_pending_action(
    mut editor_state: ResMut<EditorState>,
    mut session: ResMut<EditSession>,
    mut staging: ResMut<ImportStaging>,
) {
    if let Some(action) = editor_state.pending_action.take() {
        apply_action(action, &mut editor_state, &mut session, &mut staging);
    }
}

/// System to persist recent world updates
fn handle_recent_worlds(
    mut editor_state: ResMut<EditorState>,
    mut preferences: ResMut<EditorPreferences>,
) {
    if update_recent_worlds(&mut editor_state, &mut preferences) {
        if let Err(e) = preferences.save() {
            bevy::log::error!("Failed to save preferences: {}", e);
        }
    }
}

/// Apply queued recent-list changes. Returns `true` if the list changed.
fn update_recent_worlds(
    editor_state: &mut EditorState,
    preferences: &mut EditorPreferences,
) -> bool {
    let mut changed = false;
    if let Some(path) = editor_state.pending_add_recent_world.take() {
        preferences.add_recent_world(path);
        changed = true;
    }
    if let Some(path) = editor_state.pending_remove_recent_world.take() {
        preferences.remove_recent_world(&path);
        changed = true;
    }
    changed
}

/// Plugin installing the world builder resources and systems
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use worldbuilder_editor::{SessionConfig, WorldBuilderPlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         WorldBuilderPlugin::new()
///             .with_world("levels/cave.json")
///             .with_config(SessionConfig {
///                 auto_orientation: false,
///                 ..Default::default()
///             }),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct WorldBuilderPlugin {
    /// World file to open on startup. If None, starts with an empty world.
    pub world_path: Option<PathBuf>,
    /// Session settings. If None, derived from the saved preferences.
    pub config: Option<SessionConfig>,
    /// Preferences to use instead of the ones stored on disk
    pub preferences: Option<EditorPreferences>,
}

impl WorldBuilderPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a world file on startup
    pub fn with_world(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_path = Some(path.into());
        self
    }

    /// Override the session settings from preferences
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use the given preferences instead of loading them from disk
    pub fn with_preferences(mut self, preferences: EditorPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

impl Plugin for WorldBuilderPlugin {
    fn build(&self, app: &mut App) {
        let preferences = self
            .preferences
            .clone()
            .unwrap_or_else(EditorPreferences::load);
        let config = self.config.unwrap_or_else(|| preferences.session_config());

        let mut editor_state = EditorState::default();
        let session = match &self.world_path {
            Some(path) => match EditSession::open(path, config) {
                Ok(session) => session,
                Err(e) => {
                    // Keep running with a blank, unnamed world so nothing overwrites the file.
                    bevy::log::error!("Failed to load world {:?}: {}", path, e);
                    editor_state.error_message = Some(format!("Failed to load world: {}", e));
                    EditSession::new(config)
                }
            },
            None => EditSession::new(config),
        };

        app.insert_resource(session)
            .insert_resource(editor_state)
            .insert_resource(preferences)
            .init_resource::<ImportStaging>()
            .add_systems(Update, (process_pending_action, handle_recent_worlds).chain());
    }
}
