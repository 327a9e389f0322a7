//! Photo mosaic construction from a target image and a library of candidate images
//!
//! The target is partitioned into a grid of tiles. Each tile's average color is
//! matched against the average colors of the library images, and the closest
//! candidate is resized into the tile's place on the output canvas.

#![forbid(unsafe_code)]

/// Average color statistics for pixel regions
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Candidate library enumeration and closest-color matching
pub mod matching;
/// Grid layout, canvas assembly, and mosaic composition
pub mod mosaic;

pub use io::error::{MosaicError, Result};
pub use io::image::PixelImage;
