//! Staged world import
//!
//! An imported world is held here, shifted around with nudges and previewed
//! on top of the current world, until it is either committed through
//! [`EditSession::commit_import`](crate::session::EditSession::commit_import)
//! or cancelled.

use bevy::prelude::Resource;
use std::path::Path;
use worldbuilder_core::{Tile, WorldGrid};

use crate::session::{load_world, WorldFileError};

/// An imported grid waiting to be merged
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImport {
    grid: WorldGrid,
    offset_x: i32,
    offset_y: i32,
}

impl StagedImport {
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    /// Current `(x, y)` offset applied to the imported coordinates
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }
}

/// Transient import state; at most one import is staged at a time
#[derive(Debug, Clone, Default, Resource)]
pub struct ImportStaging {
    staged: Option<StagedImport>,
}

impl ImportStaging {
    /// Stage a grid at offset (0, 0), replacing any previous staged import
    pub fn stage(&mut self, grid: WorldGrid) {
        self.staged = Some(StagedImport {
            grid,
            offset_x: 0,
            offset_y: 0,
        });
    }

    /// Load and stage a world file. A failed load leaves the staging untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), WorldFileError> {
        let grid = load_world(path)?;
        bevy::log::info!("Staged import of {:?} ({} tiles)", path, grid.len());
        self.stage(grid);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.staged.is_some()
    }

    pub fn staged(&self) -> Option<&StagedImport> {
        self.staged.as_ref()
    }

    pub fn offset(&self) -> Option<(i32, i32)> {
        self.staged.as_ref().map(StagedImport::offset)
    }

    /// Shift the staged import. Returns `false` if nothing is staged.
    pub fn nudge(&mut self, dx: i32, dy: i32) -> bool {
        let Some(staged) = self.staged.as_mut() else {
            return false;
        };
        staged.offset_x = staged.offset_x.saturating_add(dx);
        staged.offset_y = staged.offset_y.saturating_add(dy);
        true
    }

    pub fn nudge_left(&mut self) -> bool {
        self.nudge(-1, 0)
    }

    pub fn nudge_right(&mut self) -> bool {
        self.nudge(1, 0)
    }

    pub fn nudge_up(&mut self) -> bool {
        self.nudge(0, -1)
    }

    pub fn nudge_down(&mut self) -> bool {
        self.nudge(0, 1)
    }

    /// The imported tile that would land on `(col, row)` if committed now
    pub fn preview_tile(&self, col: i32, row: i32) -> Option<Tile> {
        if col < 0 || row < 0 {
            return None;
        }
        let staged = self.staged.as_ref()?;
        let source_col = col.checked_sub(staged.offset_x)?;
        let source_row = row.checked_sub(staged.offset_y)?;
        staged.grid.get(source_col, source_row)
    }

    /// Discard the staged import. Returns `false` if nothing was staged.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.staged.take().is_some();
        if cancelled {
            bevy::log::info!("Cancelled staged import");
        }
        cancelled
    }

    /// Remove and return the staged import
    pub fn take(&mut self) -> Option<StagedImport> {
        self.staged.take()
    }
}
