//! Edit session
//!
//! The session owns the world being edited, its undo/redo history and the
//! "last saved" copy used for unsaved-change detection. All edits go through
//! [`EditSession::paint`], [`EditSession::erase`] and
//! [`EditSession::commit_import`], which checkpoint the grid before mutating it.

mod file;

pub use file::*;

use bevy::prelude::Resource;
use std::path::{Path, PathBuf};
use worldbuilder_autotile::{reorient_around, OrientationConfig};
use worldbuilder_core::{merge, Tile, WorldGrid};

use crate::commands::SnapshotHistory;
use crate::import::ImportStaging;

/// Behavior switches for an edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Re-orient edited tiles and their neighbors after every paint/erase
    pub auto_orientation: bool,
    /// Tile-set group layout used for orientation
    pub orientation: OrientationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_orientation: true,
            orientation: OrientationConfig::default(),
        }
    }
}

/// Per-layer brush for painting.
///
/// `Some(index)` writes that index to the layer, `None` leaves whatever the
/// target tile already has on that layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerSelection {
    pub block: Option<u32>,
    pub liquid: Option<u32>,
    pub interactable: Option<u32>,
}

impl LayerSelection {
    pub fn new(block: Option<u32>, liquid: Option<u32>, interactable: Option<u32>) -> Self {
        Self {
            block,
            liquid,
            interactable,
        }
    }

    /// Select only a block
    pub fn block(index: u32) -> Self {
        Self::new(Some(index), None, None)
    }

    /// Select only a liquid
    pub fn liquid(index: u32) -> Self {
        Self::new(None, Some(index), None)
    }

    /// Select only an interactable
    pub fn interactable(index: u32) -> Self {
        Self::new(None, None, Some(index))
    }

    /// True if painting with this selection changes nothing
    pub fn is_empty(&self) -> bool {
        self.block.is_none() && self.liquid.is_none() && self.interactable.is_none()
    }

    /// Selection picked up by sampling an existing tile.
    ///
    /// Sampling copies the block and liquid layers; the interactable
    /// selection is left unset.
    pub fn sampled(tile: &Tile) -> Self {
        Self::new(tile.block, tile.liquid, None)
    }

    /// Merge a sampled selection into this one, keeping layers the sample lacks
    pub fn absorb(&mut self, sample: LayerSelection) {
        self.block = sample.block.or(self.block);
        self.liquid = sample.liquid.or(self.liquid);
        self.interactable = sample.interactable.or(self.interactable);
    }

    fn as_tile(&self) -> Tile {
        Tile::new(self.block, self.liquid, self.interactable)
    }
}

/// The world being edited plus its history
#[derive(Debug, Clone, Default, Resource)]
pub struct EditSession {
    grid: WorldGrid,
    history: SnapshotHistory,
    config: SessionConfig,
    last_saved: WorldGrid,
    path: Option<PathBuf>,
}

impl EditSession {
    /// Start a new, empty world
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Start editing an existing grid. The grid counts as saved.
    pub fn with_grid(grid: WorldGrid, config: SessionConfig) -> Self {
        Self {
            last_saved: grid.clone(),
            grid,
            history: SnapshotHistory::new(),
            config,
            path: None,
        }
    }

    /// The current world
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// File the world was last loaded from or saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn auto_orientation(&self) -> bool {
        self.config.auto_orientation
    }

    pub fn set_auto_orientation(&mut self, enabled: bool) {
        self.config.auto_orientation = enabled;
    }

    /// Flip auto-orientation, returning the new state
    pub fn toggle_auto_orientation(&mut self) -> bool {
        self.config.auto_orientation = !self.config.auto_orientation;
        self.config.auto_orientation
    }

    /// Whether the editor accepts edits at a coordinate.
    ///
    /// Worlds are authored in the non-negative quadrant only.
    pub fn is_editable(col: i32, row: i32) -> bool {
        col >= 0 && row >= 0
    }

    /// Read the tile at a coordinate without side effects
    pub fn probe(&self, col: i32, row: i32) -> Option<Tile> {
        self.grid.get(col, row)
    }

    /// Paint `selection` onto the tile at `(col, row)`.
    ///
    /// Layers the selection leaves unset keep their current value. Returns
    /// `true` if the world changed.
    pub fn paint(&mut self, col: i32, row: i32, selection: LayerSelection) -> bool {
        if !Self::is_editable(col, row) {
            bevy::log::debug!("Ignoring paint outside editable area at ({}, {})", col, row);
            return false;
        }
        let config = self.config;
        self.apply_edit(|grid| {
            let current = grid.get(col, row).unwrap_or_default();
            grid.set(col, row, current.overlaid_with(selection.as_tile()));
            if config.auto_orientation {
                reorient_around(grid, col, row, &config.orientation);
            }
        })
    }

    /// Remove the tile at `(col, row)` on all layers.
    ///
    /// Returns `true` if the world changed.
    pub fn erase(&mut self, col: i32, row: i32) -> bool {
        if !Self::is_editable(col, row) {
            bevy::log::debug!("Ignoring erase outside editable area at ({}, {})", col, row);
            return false;
        }
        let config = self.config;
        self.apply_edit(|grid| {
            grid.remove(col, row);
            if config.auto_orientation {
                // The erased cell is empty, so only its neighbors change.
                reorient_around(grid, col, row, &config.orientation);
            }
        })
    }

    /// Merge the staged import into the world at its offset and clear staging.
    ///
    /// Returns `true` if the world changed. Does nothing without a staged import.
    pub fn commit_import(&mut self, staging: &mut ImportStaging) -> bool {
        let Some(staged) = staging.take() else {
            return false;
        };
        let (offset_x, offset_y) = staged.offset();
        let merged = merge(&self.grid, staged.grid(), offset_x, offset_y);
        bevy::log::info!(
            "Merging {} imported tiles at offset ({}, {})",
            staged.grid().len(),
            offset_x,
            offset_y
        );
        self.apply_edit(|grid| *grid = merged)
    }

    /// Step back to the previous checkpoint. No-op if there is none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.grid);
        if undone {
            bevy::log::debug!("Undo ({} steps left)", self.history.undo_len());
        }
        undone
    }

    /// Re-apply the last undone state. No-op if there is none.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.grid);
        if redone {
            bevy::log::debug!("Redo ({} steps left)", self.history.redo_len());
        }
        redone
    }

    /// True if the world differs from what was last loaded or saved
    pub fn has_unsaved_changes(&self) -> bool {
        self.grid != self.last_saved
    }

    /// Record the current world as saved
    pub fn mark_saved(&mut self) {
        self.last_saved = self.grid.clone();
    }

    /// Run a mutation, checkpointing the previous state if anything changed
    fn apply_edit(&mut self, edit: impl FnOnce(&mut WorldGrid)) -> bool {
        let before = self.grid.clone();
        edit(&mut self.grid);
        if self.grid == before {
            return false;
        }
        self.history.checkpoint(before);
        true
    }
}
