//! Horizontal reflect filter.

use crate::core::grid::PixelGrid;
use rayon::prelude::*;

/// Mirror the grid horizontally in place.
///
/// Each row is reversed independently; rows are not reordered. Paired
/// columns `j` and `width - 1 - j` are swapped exactly once per pair, so no
/// staging copy is needed and the middle column of an odd-width grid is
/// untouched. Rows have no cross-dependency, so the pass runs row-parallel.
pub fn reflect(grid: &mut PixelGrid) {
    let width = grid.width() as usize;
    grid.pixels_mut()
        .par_chunks_exact_mut(width)
        .for_each(|row| {
            for j in 0..width / 2 {
                row.swap(j, width - 1 - j);
            }
        });
}
