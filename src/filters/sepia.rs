//! Sepia filter.

use crate::core::grid::PixelGrid;

/// Apply the fixed Harvard sepia transform in place.
///
/// All three outputs are computed from a snapshot of the same original
/// triple; the green and blue formulas must see the original red, never the
/// freshly written one. Each rounded channel is clamped to 255 (the
/// coefficients can push white past the channel maximum); inputs are
/// non-negative so no lower clamp is needed.
pub fn sepia(grid: &mut PixelGrid) {
    for pixel in grid.pixels_mut() {
        let (r, g, b) = (pixel.r as f32, pixel.g as f32, pixel.b as f32);
        pixel.r = channel(0.393 * r + 0.769 * g + 0.189 * b);
        pixel.g = channel(0.349 * r + 0.686 * g + 0.168 * b);
        pixel.b = channel(0.272 * r + 0.534 * g + 0.131 * b);
    }
}

fn channel(value: f32) -> u8 {
    value.round().min(255.0) as u8
}
