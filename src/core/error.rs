//! Error types for Bimba.
//!
//! Uses thiserror for structured errors. The filter engine itself has almost
//! no runtime error surface: given a well-formed grid every filter is total.
//! Errors live at the boundary instead — unknown filter names, malformed
//! grids, and file I/O.

use thiserror::Error;

/// Top-level error type for Bimba.
///
/// Encompasses all error categories and enables automatic conversion from
/// the specific error types.
#[derive(Error, Debug)]
pub enum BimbaError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors related to the pixel grid data model.
///
/// These are precondition violations (integration errors), not recoverable
/// runtime conditions: the grid either satisfies `height >= 1, width >= 1`
/// with a fully populated buffer, or a filter refuses to run on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("Pixel buffer has {got} pixels, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },
}

/// Errors from filter selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter '{name}' (expected one of: grayscale, sepia, reflect, blur)")]
    Unknown { name: String },
}

/// Result type alias for Bimba operations.
pub type BimbaResult<T> = Result<T, BimbaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::EmptyGrid {
            width: 0,
            height: 3,
        };
        assert!(err.to_string().contains("0x3"));
    }

    #[test]
    fn test_filter_error_lists_valid_names() {
        let err = FilterError::Unknown {
            name: "sharpen".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sharpen"));
        assert!(msg.contains("grayscale"));
        assert!(msg.contains("blur"));
    }

    #[test]
    fn test_error_conversion() {
        let err: BimbaError = GridError::EmptyGrid {
            width: 0,
            height: 0,
        }
        .into();
        assert!(matches!(err, BimbaError::Grid(_)));
    }
}
