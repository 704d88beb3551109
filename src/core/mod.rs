//! Core types for the Bimba filter library.
//!
//! This module contains the foundational pieces the filters operate on:
//! - The pixel and grid data model
//! - Error types

pub mod error;
pub mod grid;

// Re-export commonly used types
pub use error::{BimbaError, FilterError, GridError};
pub use grid::{Pixel, PixelGrid};
