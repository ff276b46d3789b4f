//! # worldbuilder
//!
//! Layered 2D world builder for tile-based games.
//!
//! Worlds are sparse grids of tiles, each carrying up to three layers
//! (block, liquid, interactable). This crate bundles the data model, the
//! neighbor-driven orientation rules and the Bevy-facing edit session.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use worldbuilder::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(WorldBuilderPlugin::new().with_world("levels/cave.json"))
//!         .add_systems(Update, paint_on_click)
//!         .run();
//! }
//!
//! fn paint_on_click(mut state: ResMut<EditorState>) {
//!     state.brush = LayerSelection::block(0);
//!     state.pending_action = Some(PendingAction::Paint(4, 2));
//! }
//! ```
//!
//! ## Features
//!
//! - `editor` (default) - Edit session, undo/redo, import staging and the Bevy plugin
//!
//! ## Crate Structure
//!
//! - [`core`] - Tiles, the sparse world grid, the world file format and merging
//! - [`autotile`] - Block and liquid orientation from neighbors
//! - [`editor`] - Editing engine (requires `editor` feature)

// =============================================================================
// Core module - world data
// =============================================================================

/// World data types.
///
/// - [`Tile`] - Layer indices at one coordinate
/// - [`WorldGrid`] - Sparse column/row grid of tiles
/// - [`merge`] - Overlay one grid onto another at an offset
pub mod core {
    pub use worldbuilder_core::*;
}

pub use worldbuilder_core::{merge, GridBounds, Layer, Tile, WorldDataError, WorldGrid};

// =============================================================================
// Autotile module - tile orientation
// =============================================================================

/// Orientation of block and liquid tiles from their neighbors.
pub mod autotile {
    pub use worldbuilder_autotile::*;
}

pub use worldbuilder_autotile::{
    oriented_tile, reorient, reorient_around, NeighborMask, OrientationConfig,
    OrientationConfigError,
};

// =============================================================================
// Editor module - edit session and Bevy integration (optional)
// =============================================================================

/// Editing engine and Bevy plugin.
///
/// Requires the `editor` feature (enabled by default).
#[cfg(feature = "editor")]
pub mod editor {
    pub use worldbuilder_editor::*;
}

#[cfg(feature = "editor")]
pub use worldbuilder_editor::{
    apply_action, load_world, save_world, EditSession, EditorPreferences, EditorState,
    ImportStaging, LayerSelection, PendingAction, SessionConfig, SnapshotHistory, StagedImport,
    WorldBuilderPlugin, WorldFileError,
};

// =============================================================================
// Prelude - import everything commonly needed
// =============================================================================

/// Commonly used types.
///
/// Import with:
/// ```rust,ignore
/// use worldbuilder::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{merge, Layer, Tile, WorldGrid};

    // Autotile
    pub use crate::OrientationConfig;

    // Editor (if enabled)
    #[cfg(feature = "editor")]
    pub use crate::{
        EditSession, EditorState, ImportStaging, LayerSelection, PendingAction, SessionConfig,
        WorldBuilderPlugin,
    };
}
