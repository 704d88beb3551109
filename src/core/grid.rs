//! The pixel grid data model.
//!
//! A [`PixelGrid`] is a rectangular, row-major buffer of RGB triples with
//! explicit height and width. Row 0 is the top of the image, column 0 the
//! left. Dimensions are fixed for the grid's lifetime: every filter mutates
//! the grid in place and preserves its dimensions exactly.

use crate::core::error::GridError;
use image::RgbImage;

/// A single RGB pixel: three independent 8-bit channels, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    /// Red channel intensity (0-255).
    pub r: u8,
    /// Green channel intensity (0-255).
    pub g: u8,
    /// Blue channel intensity (0-255).
    pub b: u8,
}

impl Pixel {
    /// All-zero pixel, used as synthetic border padding by blur.
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// Create a pixel from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel with all three channels set to the same intensity.
    pub const fn splat(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(p: image::Rgb<u8>) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<Pixel> for image::Rgb<u8> {
    fn from(p: Pixel) -> Self {
        image::Rgb([p.r, p.g, p.b])
    }
}

/// A rectangular grid of pixels, stored row-major.
///
/// Created by the decoder boundary (or a constructor), exclusively owned by
/// the caller for the duration of a filter call, and mutated in place.
/// Constructors reject zero dimensions and buffer/dimension mismatches so
/// filters can assume a well-formed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid filled with the given pixel.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Create a grid from a row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid width in pixels (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(row, col)`. Panics if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Pixel {
        debug_assert!(row < self.height && col < self.width);
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// Overwrite the pixel at `(row, col)`. Panics if out of bounds.
    pub fn set(&mut self, row: u32, col: u32, pixel: Pixel) {
        debug_assert!(row < self.height && col < self.width);
        self.pixels[row as usize * self.width as usize + col as usize] = pixel;
    }

    /// A single row as a slice.
    pub fn row(&self, row: u32) -> &[Pixel] {
        let w = self.width as usize;
        let start = row as usize * w;
        &self.pixels[start..start + w]
    }

    /// A single row as a mutable slice.
    pub fn row_mut(&mut self, row: u32) -> &mut [Pixel] {
        let w = self.width as usize;
        let start = row as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Iterator over mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    /// The whole buffer as a row-major slice.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The whole buffer as a mutable row-major slice.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Defensive well-formedness check run by `Filter::apply` before
    /// dispatching. Constructors uphold these invariants, so a failure here
    /// is an integration error.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize;
        if self.pixels.len() != expected {
            return Err(GridError::SizeMismatch {
                width: self.width,
                height: self.height,
                expected,
                got: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Convert a decoded RGB image into a grid.
    pub fn from_image(img: &RgbImage) -> Result<Self, GridError> {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|&p| Pixel::from(p)).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Convert the grid back into an RGB image for encoding.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self.get(y, x).into())
    }
}
