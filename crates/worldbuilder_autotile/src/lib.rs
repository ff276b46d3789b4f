//! Automatic tile orientation for world builder grids
//!
//! Block and liquid tile-sets are laid out in fixed-size groups, one group per
//! logical tile type. The position inside a group is the tile's visual variant
//! and is derived from the occupancy of the neighboring cells:
//!
//! - **Blocks** use groups of 16 variants selected by which of the four
//!   orthogonal neighbors have no block.
//! - **Liquids** use groups of 2 variants: a surface tile, or a body tile
//!   under another liquid.
//!
//! After any edit, call [`reorient_around`] on the edited coordinate so the
//! tile and its four direct neighbors pick up matching variants.

mod config;
mod neighbors;
mod orient;

pub use config::{
    OrientationConfig, OrientationConfigError, DEFAULT_BLOCK_GROUP_SIZE, DEFAULT_LIQUID_GROUP_SIZE,
};
pub use neighbors::{
    block_variant_offset, liquid_variant_offset, NeighborMask, BLOCK_VARIANT_OFFSETS,
};
pub use orient::{oriented_tile, reorient, reorient_around, NEIGHBOR_OFFSETS};
