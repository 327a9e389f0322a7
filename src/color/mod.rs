//! Color statistics for pixel regions

/// Average color computation and color distance
pub mod statistics;

pub use statistics::{Color, average_color};
