//! Mosaic layout and assembly
//!
//! This module contains composition functionality including:
//! - Grid partitioning and tile geometry
//! - Canvas allocation and tile placement
//! - End-to-end mosaic construction

/// Output canvas and tile placement
pub mod canvas;
/// Mosaic construction from target and library
pub mod composer;
/// Grid partitioning and tile geometry
pub mod grid;

pub use composer::{MosaicComposer, MosaicConfig, compose_mosaic};
pub use grid::{MosaicGrid, TileLayout, TileSizing};
