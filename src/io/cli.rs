//! Command-line interface for building a photo mosaic

use crate::io::configuration::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_OUTPUT_PATH,
    DEFAULT_TARGET_PATH,
};
use crate::io::error::Result;
use crate::io::fetch::download_image;
use crate::io::image::ResizeFilter;
use crate::io::logging::level_for;
use crate::io::progress::TileProgress;
use crate::matching::{CachePolicy, LibraryOrder};
use crate::mosaic::{MosaicComposer, MosaicConfig, MosaicGrid, TileSizing};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Build a photo mosaic by matching library images to target tiles by average color"
)]
/// Command-line arguments for the mosaic builder
// Independent switches for cache, ordering, and sizing behavior
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Download the target image from this URL before composing
    #[arg(long, value_name = "URL")]
    pub target_url: Option<String>,

    /// Target image path (download destination when --target-url is given)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TARGET_PATH)]
    pub target_path: PathBuf,

    /// Directory of candidate images
    #[arg(short, long, value_name = "DIR")]
    pub library_dir: PathBuf,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Output file; the format follows the extension
    #[arg(
        short,
        long,
        visible_alias = "output-path",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH
    )]
    pub output: PathBuf,

    /// Subdivide the target into tiles instead of using full-size tiles
    #[arg(long)]
    pub subdivide: bool,

    /// Decode every candidate for every tile instead of memoizing colors
    #[arg(long)]
    pub no_cache: bool,

    /// Keep the raw directory listing order instead of sorting candidates
    #[arg(long)]
    pub listing_order: bool,

    /// Resampling filter for resizing
    #[arg(long, value_enum, default_value_t = ResizeFilter::Nearest)]
    pub filter: ResizeFilter,

    /// Download timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout: u64,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging detail (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum log level implied by the verbosity flags
    pub const fn log_level(&self) -> tracing::Level {
        level_for(self.verbose, self.quiet)
    }

    /// Translate arguments into a build configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid
    pub fn mosaic_config(&self) -> Result<MosaicConfig> {
        let grid = MosaicGrid::new(self.rows, self.cols)?;

        Ok(MosaicConfig {
            target_path: self.target_path.clone(),
            library_dir: self.library_dir.clone(),
            grid,
            output_path: self.output.clone(),
            tile_sizing: if self.subdivide {
                TileSizing::Subdivide
            } else {
                TileSizing::FullTarget
            },
            cache_policy: if self.no_cache {
                CachePolicy::Disabled
            } else {
                CachePolicy::Memoize
            },
            library_order: if self.listing_order {
                LibraryOrder::Listing
            } else {
                LibraryOrder::Sorted
            },
            filter: self.filter,
        })
    }
}

/// Runs a complete invocation: optional download followed by composition
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Fetch the target if requested, then build and write the mosaic
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, download, or composition fails
    pub fn run(&self) -> Result<PathBuf> {
        let config = self.cli.mosaic_config()?;

        if let Some(ref url) = self.cli.target_url {
            download_image(
                url,
                &self.cli.target_path,
                Duration::from_secs(self.cli.fetch_timeout),
            )?;
        }

        let mut composer = MosaicComposer::new(config);
        if self.cli.should_show_progress() {
            let progress = TileProgress::new(composer.config().grid.tile_count());
            composer = composer.with_progress(progress);
        }

        let output = composer.compose()?;
        tracing::info!("Mosaic created: {}", output.display());
        Ok(output)
    }
}
