//! Import merge: overlay one grid onto another at an offset

use crate::WorldGrid;

/// Merge `imported` into a copy of `base`, shifting every imported tile by
/// `(offset_x, offset_y)`.
///
/// Imported tiles replace destination tiles wholesale (layers are not
/// combined). Tiles whose shifted column or row is negative are dropped.
/// `base` is left untouched.
pub fn merge(base: &WorldGrid, imported: &WorldGrid, offset_x: i32, offset_y: i32) -> WorldGrid {
    let mut merged = base.clone();
    for (col, row, tile) in imported.iter() {
        let (Some(target_col), Some(target_row)) =
            (col.checked_add(offset_x), row.checked_add(offset_y))
        else {
            continue;
        };
        if target_col >= 0 && target_row >= 0 {
            merged.set(target_col, target_row, tile);
        }
    }
    merged
}
