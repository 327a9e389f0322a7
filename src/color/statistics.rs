//! Average color of pixel regions and the distance between colors

use crate::io::error::{MosaicError, Result};
use ndarray::{ArrayBase, Data, Ix3};

/// Per-channel representative color of a region
///
/// Each component is the truncated arithmetic mean of that channel, so it
/// always fits the 8-bit sample range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Vec<u8>);

impl Color {
    /// Build a color from explicit channel values
    pub fn from_channels(channels: &[u8]) -> Self {
        Self(channels.to_vec())
    }

    /// Channel values in image channel order
    pub fn channels(&self) -> &[u8] {
        &self.0
    }

    /// Sum of absolute per-channel differences (L1 distance)
    ///
    /// Both colors are expected to carry the same number of channels.
    pub fn distance(&self, other: &Self) -> u32 {
        debug_assert_eq!(self.0.len(), other.0.len(), "channel count mismatch");
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| u32::from(a.abs_diff(b)))
            .sum()
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels.to_vec())
    }
}

/// Compute the per-channel mean of a `(height, width, channels)` region
///
/// Sums are accumulated in `u64` and the mean is truncated toward zero.
///
/// # Errors
///
/// Returns an error if the region has zero height or zero width
pub fn average_color<S>(region: &ArrayBase<S, Ix3>) -> Result<Color>
where
    S: Data<Elem = u8>,
{
    let (height, width, channels) = region.dim();
    if height == 0 || width == 0 {
        return Err(MosaicError::EmptyRegion { height, width });
    }

    let mut sums = vec![0u64; channels];
    for pixel in region.lanes(ndarray::Axis(2)) {
        for (sum, &sample) in sums.iter_mut().zip(pixel.iter()) {
            *sum += u64::from(sample);
        }
    }

    let pixel_count = (height * width) as u64;
    let means = sums.iter().map(|&sum| (sum / pixel_count) as u8).collect();

    Ok(Color(means))
}
