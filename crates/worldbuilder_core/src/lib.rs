//! Core data structures for the world builder
//!
//! This crate provides the fundamental types for representing layered tile worlds:
//! - `Tile` - Three layer indices (block, liquid, interactable) at one coordinate
//! - `Layer` - Identifies one of the three tile layers
//! - `WorldGrid` - Sparse column/row mapping from coordinates to tiles
//! - `merge` - Overlay of an imported grid at an offset, clipped to non-negative space
//! - `WorldDataError` - Errors from the JSON world format

mod format;
mod grid;
mod merge;
mod tile;

pub use format::WorldDataError;
pub use grid::{GridBounds, WorldGrid};
pub use merge::merge;
pub use tile::{Layer, Tile};
