//! Output canvas assembled tile by tile

use crate::io::error::{Result, computation_error};
use crate::io::image::PixelImage;
use crate::mosaic::grid::Tile;
use ndarray::{ArrayView3, Axis, Slice};

/// Zero-initialized pixel buffer receiving matched candidates
pub struct Canvas {
    pixels: PixelImage,
}

impl Canvas {
    /// Allocate a black canvas
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            pixels: PixelImage::zeros((height, width, channels)),
        }
    }

    /// Canvas shape as `(height, width, channels)`
    pub fn dim(&self) -> (usize, usize, usize) {
        self.pixels.dim()
    }

    /// Copy `patch` into the region covered by `tile`
    ///
    /// # Errors
    ///
    /// Returns an error if the patch shape differs from the tile extent or the
    /// tile lies outside the canvas
    pub fn paste(&mut self, tile: &Tile, patch: &PixelImage) -> Result<()> {
        let (height, width, channels) = self.pixels.dim();
        let expected = (tile.height, tile.width, channels);

        if patch.dim() != expected {
            return Err(computation_error(
                "tile placement",
                &format!(
                    "patch shape {:?} does not match tile shape {expected:?}",
                    patch.dim()
                ),
            ));
        }
        if tile.rows().end > height || tile.cols().end > width {
            return Err(computation_error(
                "tile placement",
                &format!(
                    "tile at row {} col {} extends past {height}x{width} canvas",
                    tile.row, tile.col
                ),
            ));
        }

        let mut region = self
            .pixels
            .slice_axis_mut(Axis(0), Slice::from(tile.rows()));
        region.slice_axis_inplace(Axis(1), Slice::from(tile.cols()));
        region.assign(patch);
        Ok(())
    }

    /// Borrow the region covered by `tile`
    ///
    /// # Errors
    ///
    /// Returns an error if the tile lies outside the canvas
    pub fn region(&self, tile: &Tile) -> Result<ArrayView3<'_, u8>> {
        tile_region(&self.pixels, tile)
    }

    /// Consume the canvas and return its pixels
    pub fn into_pixels(self) -> PixelImage {
        self.pixels
    }
}

/// Borrow the region of `pixels` covered by `tile`
///
/// # Errors
///
/// Returns an error if the tile lies outside `pixels`
pub fn tile_region<'a>(pixels: &'a PixelImage, tile: &Tile) -> Result<ArrayView3<'a, u8>> {
    let (height, width, _) = pixels.dim();
    if tile.rows().end > height || tile.cols().end > width {
        return Err(computation_error(
            "tile sampling",
            &format!(
                "tile at row {} col {} extends past {height}x{width} image",
                tile.row, tile.col
            ),
        ));
    }
    let mut region = pixels.slice_axis(Axis(0), Slice::from(tile.rows()));
    region.slice_axis_inplace(Axis(1), Slice::from(tile.cols()));
    Ok(region)
}
