//! Variant recomputation for edited cells

use worldbuilder_core::{Tile, WorldGrid};

use crate::{block_variant_offset, liquid_variant_offset, NeighborMask, OrientationConfig};

/// Orthogonal neighbor offsets as `(d_col, d_row)`: right, left, below, above
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Compute the correctly oriented version of the tile at `(col, row)`.
///
/// Returns `None` for an empty coordinate. Absent layers stay absent and the
/// interactable layer is never changed.
pub fn oriented_tile(
    grid: &WorldGrid,
    col: i32,
    row: i32,
    config: &OrientationConfig,
) -> Option<Tile> {
    let tile = grid.get(col, row)?;

    let block = tile.block.map(|index| {
        config.block_group_base(index) + block_variant_offset(NeighborMask::sample(grid, col, row))
    });
    let liquid = tile.liquid.map(|index| {
        let liquid_above = row
            .checked_sub(1)
            .and_then(|above| grid.get(col, above))
            .and_then(|above| above.liquid)
            .is_some();
        config.liquid_group_base(index) + liquid_variant_offset(liquid_above)
    });

    Some(Tile {
        block,
        liquid,
        ..tile
    })
}

/// Re-orient a single coordinate without touching its neighbors.
///
/// Returns `true` if the stored tile was rewritten.
pub fn reorient(grid: &mut WorldGrid, col: i32, row: i32, config: &OrientationConfig) -> bool {
    let Some(current) = grid.get(col, row) else {
        return false;
    };
    match oriented_tile(grid, col, row, config) {
        Some(oriented) if oriented != current => {
            grid.set(col, row, oriented);
            true
        }
        _ => false,
    }
}

/// Re-orient `(col, row)` and then each of its four orthogonal neighbors.
///
/// Neighbors are visited once each and never propagate further. Returns the
/// number of tiles rewritten.
pub fn reorient_around(
    grid: &mut WorldGrid,
    col: i32,
    row: i32,
    config: &OrientationConfig,
) -> usize {
    let mut rewritten = usize::from(reorient(grid, col, row, config));
    for (d_col, d_row) in NEIGHBOR_OFFSETS {
        let (Some(n_col), Some(n_row)) = (col.checked_add(d_col), row.checked_add(d_row)) else {
            continue;
        };
        rewritten += usize::from(reorient(grid, n_col, n_row, config));
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OrientationConfig {
        OrientationConfig::default()
    }

    #[test]
    fn test_isolated_block_is_all_open() {
        let mut grid = WorldGrid::new();
        grid.set(3, 3, Tile::block(16));

        assert!(reorient(&mut grid, 3, 3, &config()));
        assert_eq!(grid.get(3, 3), Some(Tile::block(31)));
    }

    #[test]
    fn test_empty_coordinate_untouched() {
        let mut grid = WorldGrid::new();
        assert_eq!(oriented_tile(&grid, 0, 0, &config()), None);
        assert!(!reorient(&mut grid, 0, 0, &config()));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::block(2));
        grid.set(1, 0, Tile::block(7));
        grid.set(0, 1, Tile::new(Some(20), Some(1), None));

        let first = oriented_tile(&grid, 0, 0, &config());
        let second = oriented_tile(&grid, 0, 0, &config());
        assert_eq!(first, second);

        reorient(&mut grid, 0, 0, &config());
        assert!(!reorient(&mut grid, 0, 0, &config()));
    }

    #[test]
    fn test_keeps_group() {
        let mut grid = WorldGrid::new();
        // second block type, currently showing variant 3
        grid.set(0, 0, Tile::block(35));
        grid.set(1, 0, Tile::block(0));

        reorient(&mut grid, 0, 0, &config());
        // open above, below and left
        assert_eq!(grid.get(0, 0), Some(Tile::block(32 + 12)));
    }

    #[test]
    fn test_liquid_surface_and_body() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::liquid(2));
        grid.set(0, 1, Tile::liquid(3));

        reorient_around(&mut grid, 0, 1, &config());
        assert_eq!(grid.get(0, 0), Some(Tile::liquid(3)));
        assert_eq!(grid.get(0, 1), Some(Tile::liquid(2)));
    }

    #[test]
    fn test_interactable_untouched() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::new(Some(0), None, Some(7)));

        reorient(&mut grid, 0, 0, &config());
        assert_eq!(grid.get(0, 0), Some(Tile::new(Some(15), None, Some(7))));
    }

    #[test]
    fn test_liquid_only_tile_ignores_blocks_above() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::block(0));
        grid.set(0, 1, Tile::liquid(0));

        reorient(&mut grid, 0, 1, &config());
        assert_eq!(grid.get(0, 1), Some(Tile::liquid(1)));
    }

    #[test]
    fn test_range_edges_are_not_neighbors() {
        let mut grid = WorldGrid::new();
        grid.set(0, i32::MIN, Tile::new(Some(0), Some(0), None));
        grid.set(0, i32::MAX, Tile::new(Some(0), Some(0), None));

        assert_eq!(
            oriented_tile(&grid, 0, i32::MAX, &config()),
            Some(Tile::new(Some(15), Some(1), None))
        );
        // nothing above the top row, so the liquid is a surface tile
        assert_eq!(
            oriented_tile(&grid, 0, i32::MIN, &config()),
            Some(Tile::new(Some(15), Some(1), None))
        );
    }

    #[test]
    fn test_horizontal_run() {
        let mut grid = WorldGrid::new();
        for col in 0..3 {
            grid.set(col, 0, Tile::block(0));
        }
        for col in 0..3 {
            reorient_around(&mut grid, col, 0, &config());
        }

        // left cap: open above, below, left
        assert_eq!(grid.get(0, 0), Some(Tile::block(12)));
        // middle: open above and below
        assert_eq!(grid.get(1, 0), Some(Tile::block(13)));
        // right cap: open above, below, right
        assert_eq!(grid.get(2, 0), Some(Tile::block(14)));
    }

    #[test]
    fn test_propagation_is_one_hop() {
        let mut grid = WorldGrid::new();
        // Two cells away from the edit, deliberately mis-oriented.
        grid.set(2, 0, Tile::block(0));
        grid.set(1, 0, Tile::block(0));
        grid.set(0, 0, Tile::block(0));

        reorient_around(&mut grid, 0, 0, &config());

        assert_eq!(grid.get(0, 0), Some(Tile::block(12)));
        assert_eq!(grid.get(1, 0), Some(Tile::block(13)));
        assert_eq!(grid.get(2, 0), Some(Tile::block(0)));
    }

    #[test]
    fn test_reorient_around_counts_rewrites() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::block(0));
        grid.set(0, 1, Tile::block(0));

        // (0,0): open above/left/right -> 11; (0,1): open below/left/right -> 3
        assert_eq!(reorient_around(&mut grid, 0, 0, &config()), 2);
        assert_eq!(grid.get(0, 0), Some(Tile::block(11)));
        assert_eq!(grid.get(0, 1), Some(Tile::block(3)));
        assert_eq!(reorient_around(&mut grid, 0, 0, &config()), 0);
    }

    #[test]
    fn test_around_erased_cell_updates_neighbors() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::block(13));
        grid.set(1, 0, Tile::block(13));
        grid.set(2, 0, Tile::block(13));

        grid.remove(1, 0);
        assert_eq!(reorient_around(&mut grid, 1, 0, &config()), 2);
        assert_eq!(grid.get(0, 0), Some(Tile::block(15)));
        assert_eq!(grid.get(2, 0), Some(Tile::block(15)));
    }
}
