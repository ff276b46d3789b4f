//! Tile-set group layout

use serde::{Deserialize, Serialize};

use crate::BLOCK_VARIANT_OFFSETS;

/// Number of variants in every block group
pub const DEFAULT_BLOCK_GROUP_SIZE: u32 = 16;
/// Number of variants in every liquid group
pub const DEFAULT_LIQUID_GROUP_SIZE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationConfigError {
    /// Block groups must hold every neighbor variant
    BlockGroupTooSmall(u32),
    /// Liquid groups must hold both the surface and body variant
    LiquidGroupTooSmall(u32),
}

impl std::fmt::Display for OrientationConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrientationConfigError::BlockGroupTooSmall(size) => write!(
                f,
                "Block group size {} is smaller than the {} neighbor variants",
                size,
                BLOCK_VARIANT_OFFSETS.len()
            ),
            OrientationConfigError::LiquidGroupTooSmall(size) => {
                write!(f, "Liquid group size {} must be at least 2", size)
            }
        }
    }
}

impl std::error::Error for OrientationConfigError {}

/// How the block and liquid tile-sets are partitioned into variant groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupSizes")]
pub struct OrientationConfig {
    block_group_size: u32,
    liquid_group_size: u32,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            block_group_size: DEFAULT_BLOCK_GROUP_SIZE,
            liquid_group_size: DEFAULT_LIQUID_GROUP_SIZE,
        }
    }
}

/// Unvalidated form read from disk
#[derive(Deserialize)]
struct GroupSizes {
    block_group_size: u32,
    liquid_group_size: u32,
}

impl TryFrom<GroupSizes> for OrientationConfig {
    type Error = OrientationConfigError;

    fn try_from(sizes: GroupSizes) -> Result<Self, Self::Error> {
        Self::new(sizes.block_group_size, sizes.liquid_group_size)
    }
}

impl OrientationConfig {
    /// Create a config with custom group sizes
    pub fn new(
        block_group_size: u32,
        liquid_group_size: u32,
    ) -> Result<Self, OrientationConfigError> {
        if block_group_size < BLOCK_VARIANT_OFFSETS.len() as u32 {
            return Err(OrientationConfigError::BlockGroupTooSmall(block_group_size));
        }
        if liquid_group_size < 2 {
            return Err(OrientationConfigError::LiquidGroupTooSmall(liquid_group_size));
        }
        Ok(Self {
            block_group_size,
            liquid_group_size,
        })
    }

    pub fn block_group_size(&self) -> u32 {
        self.block_group_size
    }

    pub fn liquid_group_size(&self) -> u32 {
        self.liquid_group_size
    }

    /// First index of the block group containing `index`
    #[inline]
    pub fn block_group_base(&self, index: u32) -> u32 {
        (index / self.block_group_size) * self.block_group_size
    }

    /// First index of the liquid group containing `index`
    #[inline]
    pub fn liquid_group_base(&self, index: u32) -> u32 {
        (index / self.liquid_group_size) * self.liquid_group_size
    }
}
