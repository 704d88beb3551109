//! Grayscale filter.

use crate::core::grid::PixelGrid;

/// Convert the grid to grayscale in place.
///
/// Every channel is replaced with the rounded arithmetic mean of the
/// original red, green and blue values. Pure per-pixel map, so in-place
/// application in any traversal order is safe.
pub fn grayscale(grid: &mut PixelGrid) {
    for pixel in grid.pixels_mut() {
        let mean = (pixel.r as f32 + pixel.g as f32 + pixel.b as f32) / 3.0;
        let gray = mean.round() as u8;
        pixel.r = gray;
        pixel.g = gray;
        pixel.b = gray;
    }
}
