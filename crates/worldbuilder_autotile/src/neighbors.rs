//! Neighbor occupancy and variant offset tables

use worldbuilder_core::WorldGrid;

/// Variant offset inside a block group, indexed by [`NeighborMask::code`].
///
/// Code bits (1 = that neighbor has no block):
///   above = 8, below = 4, left = 2, right = 1
///
/// Offset 0 is a fully surrounded block, offset 15 a block with all sides open.
pub const BLOCK_VARIANT_OFFSETS: [u32; 16] = [
    0,  // ----
    1,  // ---R
    6,  // --L-
    7,  // --LR
    5,  // -B--
    2,  // -B-R
    4,  // -BL-
    3,  // -BLR
    9,  // A---
    10, // A--R
    8,  // A-L-
    11, // A-LR
    13, // AB--
    14, // AB-R
    12, // ABL-
    15, // ABLR
];

/// Which orthogonal neighbors of a cell have no block.
///
/// Rows grow downward, so "above" is `row - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighborMask {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

impl NeighborMask {
    /// Mask for a cell with no block on any side
    pub const ISOLATED: Self = NeighborMask {
        above: true,
        below: true,
        left: true,
        right: true,
    };

    /// Read the block occupancy around `(col, row)`
    pub fn sample(grid: &WorldGrid, col: i32, row: i32) -> Self {
        // Coordinates past the i32 range count as empty
        let open = |c: Option<i32>, r: Option<i32>| match (c, r) {
            (Some(c), Some(r)) => grid.get(c, r).and_then(|tile| tile.block).is_none(),
            _ => true,
        };
        Self {
            above: open(Some(col), row.checked_sub(1)),
            below: open(Some(col), row.checked_add(1)),
            left: open(col.checked_sub(1), Some(row)),
            right: open(col.checked_add(1), Some(row)),
        }
    }

    /// Pack into the 4-bit table index
    #[inline]
    pub fn code(&self) -> usize {
        (self.above as usize) << 3
            | (self.below as usize) << 2
            | (self.left as usize) << 1
            | self.right as usize
    }
}

/// Variant offset of a block with the given open sides
#[inline]
pub fn block_variant_offset(mask: NeighborMask) -> u32 {
    BLOCK_VARIANT_OFFSETS[mask.code()]
}

/// Variant offset of a liquid: 0 under another liquid, 1 at the surface
#[inline]
pub fn liquid_variant_offset(liquid_above: bool) -> u32 {
    if liquid_above {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldbuilder_core::Tile;

    fn mask(above: bool, below: bool, left: bool, right: bool) -> NeighborMask {
        NeighborMask {
            above,
            below,
            left,
            right,
        }
    }

    #[test]
    fn test_isolated_is_all_open() {
        assert_eq!(block_variant_offset(NeighborMask::ISOLATED), 15);
        assert_eq!(NeighborMask::ISOLATED.code(), 15);
    }

    #[test]
    fn test_surrounded_is_zero() {
        assert_eq!(block_variant_offset(NeighborMask::default()), 0);
    }

    #[test]
    fn test_table_entries() {
        // open above only
        assert_eq!(block_variant_offset(mask(true, false, false, false)), 9);
        // open below only
        assert_eq!(block_variant_offset(mask(false, true, false, false)), 5);
        // open left only
        assert_eq!(block_variant_offset(mask(false, false, true, false)), 6);
        // open right only
        assert_eq!(block_variant_offset(mask(false, false, false, true)), 1);
        // horizontal strip piece, open above and below
        assert_eq!(block_variant_offset(mask(true, true, false, false)), 13);
        // vertical strip piece, open left and right
        assert_eq!(block_variant_offset(mask(false, false, true, true)), 7);
        // top-left corner
        assert_eq!(block_variant_offset(mask(true, false, true, false)), 8);
        // bottom-right corner
        assert_eq!(block_variant_offset(mask(false, true, false, true)), 2);
        // end caps
        assert_eq!(block_variant_offset(mask(true, true, true, false)), 12);
        assert_eq!(block_variant_offset(mask(true, true, false, true)), 14);
        assert_eq!(block_variant_offset(mask(true, false, true, true)), 11);
        assert_eq!(block_variant_offset(mask(false, true, true, true)), 3);
    }

    #[test]
    fn test_table_is_a_permutation() {
        let mut seen = BLOCK_VARIANT_OFFSETS;
        seen.sort_unstable();
        let expected: Vec<u32> = (0..16).collect();
        assert_eq!(seen.to_vec(), expected);
    }

    #[test]
    fn test_sample_reads_block_layer_only() {
        let mut grid = WorldGrid::new();
        grid.set(5, 4, Tile::block(0));
        grid.set(5, 6, Tile::liquid(0));
        grid.set(4, 5, Tile::interactable(1));
        grid.set(6, 5, Tile::new(Some(16), Some(1), None));

        let sampled = NeighborMask::sample(&grid, 5, 5);
        assert_eq!(sampled, mask(false, true, true, false));
    }

    #[test]
    fn test_sample_does_not_wrap_at_range_edges() {
        let mut grid = WorldGrid::new();
        grid.set(0, i32::MIN, Tile::block(0));
        grid.set(0, i32::MAX, Tile::block(0));
        grid.set(i32::MIN, 0, Tile::block(0));
        grid.set(i32::MAX, 0, Tile::block(0));

        assert_eq!(NeighborMask::sample(&grid, 0, i32::MAX), NeighborMask::ISOLATED);
        assert_eq!(NeighborMask::sample(&grid, 0, i32::MIN), NeighborMask::ISOLATED);
        assert_eq!(NeighborMask::sample(&grid, i32::MAX, 0), NeighborMask::ISOLATED);
        assert_eq!(NeighborMask::sample(&grid, i32::MIN, 0), NeighborMask::ISOLATED);
    }

    #[test]
    fn test_sample_empty_grid() {
        assert_eq!(
            NeighborMask::sample(&WorldGrid::new(), 0, 0),
            NeighborMask::ISOLATED
        );
    }

    #[test]
    fn test_liquid_offsets() {
        assert_eq!(liquid_variant_offset(true), 0);
        assert_eq!(liquid_variant_offset(false), 1);
    }
}
