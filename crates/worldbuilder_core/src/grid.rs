//! Sparse layered tile grid

use crate::Tile;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Raw nested storage: column -> row -> tile
type Columns = BTreeMap<i32, BTreeMap<i32, Tile>>;

/// Occupied extent of a grid (inclusive on all sides)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl GridBounds {
    /// Number of columns covered
    pub fn width(&self) -> u32 {
        self.max_col.abs_diff(self.min_col) + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> u32 {
        self.max_row.abs_diff(self.min_row) + 1
    }
}

/// Sparse mapping from (column, row) to [`Tile`].
///
/// A coordinate without an entry is empty. The grid never stores an empty
/// tile and never keeps an empty column, so two grids holding the same tiles
/// compare equal regardless of how they were edited. Cloning produces a fully
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldGrid {
    columns: Columns,
}

impl WorldGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from raw nested columns, dropping empty tiles and columns
    pub fn from_columns(columns: BTreeMap<i32, BTreeMap<i32, Tile>>) -> Self {
        let mut grid = Self::new();
        for (col, rows) in columns {
            for (row, tile) in rows {
                grid.set(col, row, tile);
            }
        }
        grid
    }

    /// Read access to the nested column -> row -> tile storage
    pub fn columns(&self) -> &BTreeMap<i32, BTreeMap<i32, Tile>> {
        &self.columns
    }

    /// Get the tile at a coordinate, `None` if empty
    pub fn get(&self, col: i32, row: i32) -> Option<Tile> {
        self.columns
            .get(&col)
            .and_then(|rows| rows.get(&row))
            .copied()
    }

    /// Check whether a coordinate holds a tile
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.get(col, row).is_some()
    }

    /// Store a tile. An empty tile removes the entry instead.
    pub fn set(&mut self, col: i32, row: i32, tile: Tile) {
        if tile.is_empty() {
            self.remove(col, row);
            return;
        }
        self.columns.entry(col).or_default().insert(row, tile);
    }

    /// Remove the tile at a coordinate, returning it if present
    pub fn remove(&mut self, col: i32, row: i32) -> Option<Tile> {
        let rows = self.columns.get_mut(&col)?;
        let removed = rows.remove(&row);
        if rows.is_empty() {
            self.columns.remove(&col);
        }
        removed
    }

    /// True if no tile is stored
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of occupied coordinates
    pub fn len(&self) -> usize {
        self.columns.values().map(BTreeMap::len).sum()
    }

    /// Iterate all tiles as `(col, row, tile)`, column-major in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.columns
            .iter()
            .flat_map(|(&col, rows)| rows.iter().map(move |(&row, &tile)| (col, row, tile)))
    }

    /// Occupied extent, `None` for an empty grid
    pub fn bounds(&self) -> Option<GridBounds> {
        let min_col = *self.columns.keys().next()?;
        let max_col = *self.columns.keys().next_back()?;
        let mut min_row = i32::MAX;
        let mut max_row = i32::MIN;
        for rows in self.columns.values() {
            if let (Some(first), Some(last)) = (rows.keys().next(), rows.keys().next_back()) {
                min_row = min_row.min(*first);
                max_row = max_row.max(*last);
            }
        }
        Some(GridBounds {
            min_col,
            max_col,
            min_row,
            max_row,
        })
    }
}

impl FromIterator<(i32, i32, Tile)> for WorldGrid {
    fn from_iter<I: IntoIterator<Item = (i32, i32, Tile)>>(iter: I) -> Self {
        let mut grid = WorldGrid::new();
        for (col, row, tile) in iter {
            grid.set(col, row, tile);
        }
        grid
    }
}

impl Serialize for WorldGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorldGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Columns::deserialize(deserializer).map(WorldGrid::from_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut grid = WorldGrid::new();
        assert_eq!(grid.get(3, 4), None);

        grid.set(3, 4, Tile::block(1));
        assert_eq!(grid.get(3, 4), Some(Tile::block(1)));
        assert!(grid.contains(3, 4));

        grid.set(3, 4, Tile::liquid(0));
        assert_eq!(grid.get(3, 4), Some(Tile::liquid(0)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_set_empty_removes_entry_and_column() {
        let mut grid = WorldGrid::new();
        grid.set(2, 7, Tile::block(5));
        grid.set(2, 7, Tile::EMPTY);

        assert_eq!(grid.get(2, 7), None);
        assert!(grid.is_empty());
        assert!(grid.columns().get(&2).is_none());
    }

    #[test]
    fn test_set_empty_on_missing_coordinate() {
        let mut grid = WorldGrid::new();
        grid.set(-4, 9, Tile::EMPTY);
        assert!(grid.columns().is_empty());
    }

    #[test]
    fn test_remove_keeps_other_rows() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, Tile::block(0));
        grid.set(0, 1, Tile::block(0));

        assert_eq!(grid.remove(0, 0), Some(Tile::block(0)));
        assert_eq!(grid.remove(0, 0), None);
        assert_eq!(grid.columns().get(&0).map(BTreeMap::len), Some(1));

        grid.remove(0, 1);
        assert!(grid.columns().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = WorldGrid::new();
        grid.set(1, 1, Tile::block(2));
        let snapshot = grid.clone();

        grid.set(1, 1, Tile::block(9));
        grid.set(1, 2, Tile::liquid(0));

        assert_eq!(snapshot.get(1, 1), Some(Tile::block(2)));
        assert_eq!(snapshot.get(1, 2), None);
        assert_ne!(snapshot, grid);
    }

    #[test]
    fn test_equality_ignores_edit_history() {
        let mut a = WorldGrid::new();
        a.set(0, 0, Tile::block(1));
        a.set(5, 5, Tile::block(1));
        a.remove(5, 5);

        let mut b = WorldGrid::new();
        b.set(0, 0, Tile::block(1));

        assert_eq!(a, b);
    }

    #[test]
    fn test_from_columns_drops_empty_tiles() {
        let mut columns = BTreeMap::new();
        columns.insert(0, BTreeMap::from([(0, Tile::EMPTY)]));
        columns.insert(1, BTreeMap::from([(2, Tile::block(3)), (3, Tile::EMPTY)]));
        columns.insert(4, BTreeMap::new());

        let grid = WorldGrid::from_columns(columns);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.columns().len(), 1);
        assert_eq!(grid.get(1, 2), Some(Tile::block(3)));
    }

    #[test]
    fn test_iter_order() {
        let grid: WorldGrid = [
            (2, 0, Tile::block(0)),
            (0, 5, Tile::block(1)),
            (0, 1, Tile::block(2)),
        ]
        .into_iter()
        .collect();

        let coords: Vec<(i32, i32)> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords, vec![(0, 1), (0, 5), (2, 0)]);
    }

    #[test]
    fn test_bounds() {
        let mut grid = WorldGrid::new();
        assert_eq!(grid.bounds(), None);

        grid.set(3, 10, Tile::block(0));
        grid.set(-2, 4, Tile::liquid(1));
        grid.set(7, 6, Tile::interactable(0));

        let bounds = grid.bounds().unwrap();
        assert_eq!(
            bounds,
            GridBounds {
                min_col: -2,
                max_col: 7,
                min_row: 4,
                max_row: 10,
            }
        );
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 7);
    }
}
