//! # Bimba - Bitmap Filters
//!
//! Bimba applies per-pixel and neighborhood filters to an in-memory bitmap:
//! grayscale, sepia, horizontal reflect and 3x3 box blur. Each filter is a
//! single synchronous full-grid pass that mutates the grid in place and
//! preserves its dimensions exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use bimba::prelude::*;
//!
//! let mut grid = PixelGrid::filled(4, 4, Pixel::new(200, 120, 40)).unwrap();
//!
//! let filter: Filter = "sepia".parse().unwrap();
//! filter.apply(&mut grid).unwrap();
//!
//! assert_eq!(grid.dimensions(), (4, 4));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: the pixel grid data model and error types
//! - [`filters`]: the four filter implementations and the [`Filter`] enum
//!   that selects between them
//! - [`io`]: the decode/encode boundary built on the `image` crate
//!
//! The filters share no state and need no dispatch hierarchy, so selection
//! is a closed enum rather than a trait object. Reflect and blur parallelize
//! across rows internally; concurrent calls on distinct grids are safe,
//! concurrent calls on the same grid are not supported.
//!
//! [`Filter`]: filters::Filter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod filters;
pub mod io;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::error::{BimbaError, BimbaResult, FilterError, GridError};
    pub use crate::core::grid::{Pixel, PixelGrid};
    pub use crate::filters::Filter;
    pub use crate::io::{load_grid, save_grid};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "bimba");
    }

    #[test]
    fn test_known_2x2_scenario() {
        let pixels = vec![
            Pixel::new(255, 0, 0),
            Pixel::new(0, 255, 0),
            Pixel::new(0, 0, 255),
            Pixel::new(255, 255, 255),
        ];

        let mut gray = PixelGrid::from_pixels(2, 2, pixels.clone()).unwrap();
        Filter::Grayscale.apply(&mut gray).unwrap();
        assert_eq!(gray.get(0, 0), Pixel::splat(85));
        assert_eq!(gray.get(1, 1), Pixel::splat(255));

        let mut mirrored = PixelGrid::from_pixels(2, 2, pixels).unwrap();
        Filter::Reflect.apply(&mut mirrored).unwrap();
        assert_eq!(mirrored.get(0, 0), Pixel::new(0, 255, 0));
        assert_eq!(mirrored.get(0, 1), Pixel::new(255, 0, 0));
        assert_eq!(mirrored.get(1, 0), Pixel::new(255, 255, 255));
        assert_eq!(mirrored.get(1, 1), Pixel::new(0, 0, 255));
    }
}
