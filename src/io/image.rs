//! Image codec boundary: decoding to pixel arrays, resampling, and atomic encoding
//!
//! Everything outside this module works on [`PixelImage`] arrays shaped
//! `(height, width, channels)`. Decoding always yields three RGB channels.

use crate::io::error::{MosaicError, Result, computation_error, file_system_error};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use ndarray::Array3;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decoded pixels indexed by `(row, col, channel)`
pub type PixelImage = Array3<u8>;

/// Number of channels produced by [`decode_image`]
pub const RGB_CHANNELS: usize = 3;

/// Resampling filter used whenever an image is resized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResizeFilter {
    /// Nearest neighbor; keeps solid regions exact under integer upscaling
    #[default]
    Nearest,
    /// Linear interpolation
    Triangle,
    /// Cubic interpolation
    CatmullRom,
    /// Gaussian smoothing
    Gaussian,
    /// Lanczos with a window of three
    Lanczos3,
}

impl ResizeFilter {
    const fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decode an image file into an RGB pixel array
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a supported image
/// - The decoded image has a zero dimension
pub fn decode_image(path: &Path) -> Result<PixelImage> {
    let decoded = image::open(path).map_err(|e| MosaicError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    if width == 0 || height == 0 {
        return Err(MosaicError::EmptyRegion { height, width });
    }

    rgb_to_pixels(rgb)
}

/// Resample a pixel array to exactly `width` x `height`
///
/// # Errors
///
/// Returns an error if:
/// - The source does not have three channels
/// - The requested size is zero or does not fit the image backend
pub fn resize_image(
    pixels: &PixelImage,
    width: usize,
    height: usize,
    filter: ResizeFilter,
) -> Result<PixelImage> {
    if width == 0 || height == 0 {
        return Err(MosaicError::EmptyRegion { height, width });
    }

    let (source_height, source_width, _) = pixels.dim();
    if (source_height, source_width) == (height, width) {
        return Ok(pixels.clone());
    }

    let target_width = u32::try_from(width)
        .map_err(|e| computation_error("resize", &format!("width {width}: {e}")))?;
    let target_height = u32::try_from(height)
        .map_err(|e| computation_error("resize", &format!("height {height}: {e}")))?;

    let rgb = pixels_to_rgb(pixels)?;
    let resized = imageops::resize(&rgb, target_width, target_height, filter.filter_type());
    rgb_to_pixels(resized)
}

/// Encode a pixel array to `path`, choosing the format from its extension
///
/// The image is written to a temporary file beside the destination and renamed
/// into place once complete, so a failed write never leaves a partial file.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a supported format
/// - The pixel array does not have three channels
/// - The temporary file cannot be created, written, or renamed
pub fn encode_image(pixels: &PixelImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| MosaicError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = pixels_to_rgb(pixels)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)
        .map_err(|e| file_system_error(directory, "create directory", e))?;

    let staging = tempfile::NamedTempFile::new_in(directory)
        .map_err(|e| file_system_error(directory, "create temporary file", e))?;

    {
        let mut writer = BufWriter::new(staging.as_file());
        rgb.write_to(&mut writer, format)
            .map_err(|e| MosaicError::Encode {
                path: path.to_path_buf(),
                source: e,
            })?;
        writer
            .flush()
            .map_err(|e| file_system_error(staging.path(), "flush", e))?;
    }

    staging
        .persist(path)
        .map_err(|e| file_system_error(path, "rename into place", e.error))?;

    Ok(())
}

fn rgb_to_pixels(rgb: RgbImage) -> Result<PixelImage> {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    Array3::from_shape_vec((height, width, RGB_CHANNELS), rgb.into_raw())
        .map_err(|e| computation_error("pixel conversion", &e))
}

fn pixels_to_rgb(pixels: &PixelImage) -> Result<RgbImage> {
    let (height, width, channels) = pixels.dim();
    if channels != RGB_CHANNELS {
        return Err(computation_error(
            "pixel conversion",
            &format!("expected {RGB_CHANNELS} channels, found {channels}"),
        ));
    }

    let width_u32 = u32::try_from(width)
        .map_err(|e| computation_error("pixel conversion", &format!("width {width}: {e}")))?;
    let height_u32 = u32::try_from(height)
        .map_err(|e| computation_error("pixel conversion", &format!("height {height}: {e}")))?;

    // Logical iteration order is row-major regardless of memory layout
    let raw: Vec<u8> = pixels.iter().copied().collect();
    RgbImage::from_raw(width_u32, height_u32, raw).ok_or_else(|| {
        computation_error(
            "pixel conversion",
            &format!("buffer does not fill {width}x{height} image"),
        )
    })
}
