//! Bitmap decode/encode boundary.
//!
//! The filter engine only ever sees a [`PixelGrid`]; this module is the
//! external collaborator that turns files into grids and back. Format
//! detection, header handling and row padding all belong to the `image`
//! crate, not to the filters.

use crate::core::error::BimbaError;
use crate::core::grid::PixelGrid;
use std::path::Path;

/// Decode an image file into a pixel grid.
///
/// Any format the `image` crate recognizes (BMP, PNG, JPEG, TIFF) is
/// accepted; the decoded image is converted to 8-bit RGB, dropping any
/// alpha channel.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid, BimbaError> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(PixelGrid::from_image(&img)?)
}

/// Encode a pixel grid to an image file.
///
/// The output format is chosen from the file extension by the `image`
/// crate.
pub fn save_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), BimbaError> {
    let path = path.as_ref();
    grid.to_image().save(path)?;
    log::info!(
        "saved {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Pixel;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let grid = PixelGrid::from_pixels(
            2,
            2,
            vec![
                Pixel::new(255, 0, 0),
                Pixel::new(0, 255, 0),
                Pixel::new(0, 0, 255),
                Pixel::new(10, 20, 30),
            ],
        )
        .unwrap();

        save_grid(&grid, &path).unwrap();
        let loaded = load_grid(&path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_grid("/nonexistent/input.bmp").unwrap_err();
        assert!(matches!(
            err,
            BimbaError::Image(_) | BimbaError::Io(_)
        ));
    }
}
