//! Box blur filter.
//!
//! The hard part of blurring in place is read/write interference: a pixel's
//! neighbors must come from the original image, not from values the pass has
//! already overwritten. The filter therefore snapshots the original into a
//! black-bordered copy scoped to the call and samples only from that copy,
//! which makes writing into the live grid during the pass safe.

use crate::core::grid::{Pixel, PixelGrid};
use rayon::prelude::*;

/// Blur the grid in place with an unweighted 3x3 box average.
///
/// Every output channel is the rounded mean of the 9 samples in the pixel's
/// 3x3 neighborhood of the original image. Samples outside the grid are
/// synthetic black and still count toward the divisor of 9, so edges and
/// corners darken rather than being averaged over a smaller window. The
/// average of non-negative bytes cannot exceed 255, so no clamp is needed.
pub fn blur(grid: &mut PixelGrid) {
    let width = grid.width() as usize;
    let height = grid.height() as usize;

    // Snapshot the original with a one-pixel black ring on all four sides.
    let padded_width = width + 2;
    let mut padded = vec![Pixel::BLACK; padded_width * (height + 2)];
    for (i, row) in grid.rows().enumerate() {
        let start = (i + 1) * padded_width + 1;
        padded[start..start + width].copy_from_slice(row);
    }

    grid.pixels_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(i, out_row)| {
            for (j, out) in out_row.iter_mut().enumerate() {
                *out = average_window(&padded, padded_width, i, j);
            }
        });
}

/// Average the 3x3 window of padded coordinates `(i..i+3, j..j+3)`, which
/// is centered on original coordinate `(i, j)`.
fn average_window(padded: &[Pixel], padded_width: usize, i: usize, j: usize) -> Pixel {
    let mut sum_r = 0u32;
    let mut sum_g = 0u32;
    let mut sum_b = 0u32;
    for di in 0..3 {
        let start = (i + di) * padded_width + j;
        for sample in &padded[start..start + 3] {
            sum_r += sample.r as u32;
            sum_g += sample.g as u32;
            sum_b += sample.b as u32;
        }
    }
    Pixel::new(
        (sum_r as f32 / 9.0).round() as u8,
        (sum_g as f32 / 9.0).round() as u8,
        (sum_b as f32 / 9.0).round() as u8,
    )
}
