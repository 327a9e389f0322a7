//! Grid partitioning of the mosaic canvas into tiles
//!
//! Tile extents are derived from the original target dimensions before any
//! resizing, and the same extents are used for sampling the target and for
//! placing candidates.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::image::RGB_CHANNELS;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use std::ops::Range;

/// Number of tiles along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGrid {
    /// Tiles stacked vertically
    pub rows: usize,
    /// Tiles placed side by side
    pub cols: usize,
}

impl MosaicGrid {
    /// Create a grid of `rows` x `cols` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero or the tile count overflows
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be at least 1"));
        }
        if cols == 0 {
            return Err(invalid_parameter("cols", &cols, &"must be at least 1"));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"tile count overflows",
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// How tile pixel size relates to the target image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TileSizing {
    /// Every tile is as large as the whole target image
    ///
    /// The canvas becomes `rows * H` by `cols * W`, so a 5x5 grid enlarges the
    /// target twenty-five fold rather than subdividing it.
    #[default]
    FullTarget,
    /// Tiles subdivide the target: `H / rows` by `W / cols`, rounded down
    Subdivide,
}

/// Single grid cell and its pixel extent on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Grid row index
    pub row: usize,
    /// Grid column index
    pub col: usize,
    /// First pixel row covered by the tile
    pub top: usize,
    /// First pixel column covered by the tile
    pub left: usize,
    /// Tile height in pixels
    pub height: usize,
    /// Tile width in pixels
    pub width: usize,
}

impl Tile {
    /// Pixel rows covered by the tile
    pub const fn rows(&self) -> Range<usize> {
        self.top..self.top + self.height
    }

    /// Pixel columns covered by the tile
    pub const fn cols(&self) -> Range<usize> {
        self.left..self.left + self.width
    }
}

/// Pixel geometry of a mosaic: tile extents and canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    grid: MosaicGrid,
    tile_height: usize,
    tile_width: usize,
}

impl TileLayout {
    /// Derive the layout for a target of `target_height` x `target_width` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sizing yields tiles with no pixels
    /// - A canvas side would exceed [`MAX_CANVAS_DIMENSION`] or the pixel buffer
    ///   size would overflow
    pub fn new(
        target_height: usize,
        target_width: usize,
        grid: MosaicGrid,
        sizing: TileSizing,
    ) -> Result<Self> {
        let (tile_height, tile_width) = match sizing {
            TileSizing::FullTarget => (target_height, target_width),
            TileSizing::Subdivide => (target_height / grid.rows, target_width / grid.cols),
        };

        if tile_height == 0 || tile_width == 0 {
            return Err(MosaicError::EmptyRegion {
                height: tile_height,
                width: tile_width,
            });
        }

        let canvas_height = grid.rows.checked_mul(tile_height);
        let canvas_width = grid.cols.checked_mul(tile_width);
        let fits = match (canvas_height, canvas_width) {
            (Some(h), Some(w)) => {
                h <= MAX_CANVAS_DIMENSION
                    && w <= MAX_CANVAS_DIMENSION
                    && h.checked_mul(w)
                        .and_then(|area| area.checked_mul(RGB_CHANNELS))
                        .is_some()
            }
            _ => false,
        };
        if !fits {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.rows, grid.cols),
                &format!(
                    "canvas of {}x{} tiles of {tile_height}x{tile_width} pixels exceeds the addressable image size",
                    grid.rows, grid.cols
                ),
            ));
        }

        Ok(Self {
            grid,
            tile_height,
            tile_width,
        })
    }

    /// Grid this layout partitions
    pub const fn grid(&self) -> MosaicGrid {
        self.grid
    }

    /// Height of every tile in pixels
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Width of every tile in pixels
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> usize {
        self.grid.rows * self.tile_height
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> usize {
        self.grid.cols * self.tile_width
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.grid.rows).flat_map(move |row| {
            (0..self.grid.cols).map(move |col| Tile {
                row,
                col,
                top: row * self.tile_height,
                left: col * self.tile_width,
                height: self.tile_height,
                width: self.tile_width,
            })
        })
    }
}
