//! The filter engine.
//!
//! Four independent, pure in-place transforms over a [`PixelGrid`]:
//! grayscale, sepia, horizontal reflect and 3x3 box blur. The filters share
//! no state and need no dispatch hierarchy, so they are modeled as a closed
//! [`Filter`] enum mapped to four free functions rather than trait objects.

mod blur;
mod grayscale;
mod reflect;
mod sepia;

pub use blur::blur;
pub use grayscale::grayscale;
pub use reflect::reflect;
pub use sepia::sepia;

use crate::core::error::{FilterError, GridError};
use crate::core::grid::PixelGrid;
use std::fmt;
use std::str::FromStr;

/// The closed set of available filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Replace every channel with the mean of the original triple.
    Grayscale,
    /// Fixed Harvard sepia transform.
    Sepia,
    /// Horizontal mirror.
    Reflect,
    /// 3x3 box blur with black border padding.
    Blur,
}

impl Filter {
    /// Every filter, in CLI listing order.
    pub const ALL: [Filter; 4] = [
        Filter::Grayscale,
        Filter::Sepia,
        Filter::Reflect,
        Filter::Blur,
    ];

    /// The identifier used for selection (CLI argument, `from_str`).
    pub fn id(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
        }
    }

    /// Human-readable description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Filter::Grayscale => "Convert to grayscale (channel mean)",
            Filter::Sepia => "Apply a sepia tone",
            Filter::Reflect => "Mirror the image horizontally",
            Filter::Blur => "Apply a 3x3 box blur",
        }
    }

    /// Apply this filter to the grid in place.
    ///
    /// Fails fast on a malformed grid (zero dimensions or a buffer that does
    /// not match them); given a well-formed grid the transform is total and
    /// preserves the grid's dimensions exactly.
    pub fn apply(&self, grid: &mut PixelGrid) -> Result<(), GridError> {
        grid.validate()?;
        log::debug!(
            "applying {} to {}x{} grid",
            self.id(),
            grid.width(),
            grid.height()
        );
        match self {
            Filter::Grayscale => grayscale(grid),
            Filter::Sepia => sepia(grid),
            Filter::Reflect => reflect(grid),
            Filter::Blur => blur(grid),
        }
        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grayscale" => Ok(Filter::Grayscale),
            "sepia" => Ok(Filter::Sepia),
            "reflect" => Ok(Filter::Reflect),
            "blur" => Ok(Filter::Blur),
            other => Err(FilterError::Unknown {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Pixel;
    use proptest::prelude::*;

    fn grid_2x2() -> PixelGrid {
        PixelGrid::from_pixels(
            2,
            2,
            vec![
                Pixel::new(255, 0, 0),
                Pixel::new(0, 255, 0),
                Pixel::new(0, 0, 255),
                Pixel::new(255, 255, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_str_known_ids() {
        for filter in Filter::ALL {
            assert_eq!(filter.id().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_from_str_unknown_id() {
        let err = "sharpen".parse::<Filter>().unwrap_err();
        assert_eq!(
            err,
            FilterError::Unknown {
                name: "sharpen".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Filter::Blur.to_string(), "blur");
        assert_eq!("blur".parse::<Filter>().unwrap(), Filter::Blur);
    }

    #[test]
    fn test_apply_preserves_dimensions() {
        for filter in Filter::ALL {
            let mut grid = grid_2x2();
            filter.apply(&mut grid).unwrap();
            assert_eq!(grid.dimensions(), (2, 2), "{filter} changed dimensions");
        }
    }

    fn arb_grid() -> impl Strategy<Value = PixelGrid> {
        (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(
                (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Pixel::new(r, g, b)),
                (w * h) as usize,
            )
            .prop_map(move |pixels| PixelGrid::from_pixels(w, h, pixels).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_dimensions_preserved(grid in arb_grid()) {
            for filter in Filter::ALL {
                let mut out = grid.clone();
                filter.apply(&mut out).unwrap();
                prop_assert_eq!(out.dimensions(), grid.dimensions());
            }
        }

        #[test]
        fn prop_reflect_involution(grid in arb_grid()) {
            let mut out = grid.clone();
            Filter::Reflect.apply(&mut out).unwrap();
            Filter::Reflect.apply(&mut out).unwrap();
            prop_assert_eq!(out, grid);
        }

        #[test]
        fn prop_grayscale_idempotent(grid in arb_grid()) {
            let mut once = grid.clone();
            Filter::Grayscale.apply(&mut once).unwrap();
            let mut twice = once.clone();
            Filter::Grayscale.apply(&mut twice).unwrap();
            prop_assert_eq!(twice, once);
        }
    }
}
