//! Undo/redo history
//!
//! History is snapshot based: every checkpoint is a complete, independent copy
//! of the world grid. Undo swaps the current grid with the most recent
//! checkpoint and parks the current grid on the redo stack; redo is the
//! mirror image.

use worldbuilder_core::WorldGrid;

/// Undo and redo stacks of world snapshots (most recent last)
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    undo_stack: Vec<WorldGrid>,
    redo_stack: Vec<WorldGrid>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot onto the undo stack.
    ///
    /// Skipped when it equals the current top so repeated identical
    /// checkpoints collapse into one. Returns `true` if pushed.
    ///
    /// The redo stack is left alone: a new edit after an undo keeps the
    /// undone states reachable with redo.
    pub fn checkpoint(&mut self, snapshot: WorldGrid) -> bool {
        if self.undo_stack.last() == Some(&snapshot) {
            return false;
        }
        self.undo_stack.push(snapshot);
        true
    }

    /// Restore the most recent checkpoint into `current`.
    ///
    /// Returns `false` without touching anything if there is nothing to undo.
    pub fn undo(&mut self, current: &mut WorldGrid) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(current, previous));
        true
    }

    /// Re-apply the most recently undone state into `current`.
    ///
    /// Returns `false` without touching anything if there is nothing to redo.
    pub fn redo(&mut self, current: &mut WorldGrid) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(current, next));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo steps available
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The snapshot the next undo would restore
    pub fn peek_undo(&self) -> Option<&WorldGrid> {
        self.undo_stack.last()
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
