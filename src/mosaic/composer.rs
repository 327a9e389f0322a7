//! Mosaic construction: grid partitioning, per-tile matching, and canvas assembly

use crate::color::average_color;
use crate::io::configuration::DEFAULT_OUTPUT_PATH;
use crate::io::error::Result;
use crate::io::image::{PixelImage, ResizeFilter, decode_image, encode_image, resize_image};
use crate::io::progress::TileProgress;
use crate::matching::{CachePolicy, CandidateLibrary, CandidateMatcher, LibraryOrder};
use crate::mosaic::canvas::{Canvas, tile_region};
use crate::mosaic::grid::{MosaicGrid, TileLayout, TileSizing};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parameters controlling a single mosaic build
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Image the mosaic approximates
    pub target_path: PathBuf,
    /// Directory holding candidate images
    pub library_dir: PathBuf,
    /// Tile counts along each axis
    pub grid: MosaicGrid,
    /// Destination of the encoded mosaic
    pub output_path: PathBuf,
    /// Relation between tile size and target size
    pub tile_sizing: TileSizing,
    /// Whether candidate colors are memoized for the build
    pub cache_policy: CachePolicy,
    /// Ordering of the enumerated library
    pub library_order: LibraryOrder,
    /// Resampling filter for target and candidate resizing
    pub filter: ResizeFilter,
}

impl MosaicConfig {
    /// Configuration with default output path and policies
    pub fn new(target_path: &Path, library_dir: &Path, grid: MosaicGrid) -> Self {
        Self {
            target_path: target_path.to_path_buf(),
            library_dir: library_dir.to_path_buf(),
            grid,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            tile_sizing: TileSizing::default(),
            cache_policy: CachePolicy::default(),
            library_order: LibraryOrder::default(),
            filter: ResizeFilter::default(),
        }
    }

    /// Replace the output path
    #[must_use]
    pub fn with_output_path(mut self, output_path: &Path) -> Self {
        self.output_path = output_path.to_path_buf();
        self
    }
}

/// Counters gathered while composing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositionStats {
    /// Tiles placed on the canvas
    pub tiles: usize,
    /// Candidate decodes performed while matching
    pub match_decodes: usize,
    /// Sum of best-match distances over all tiles
    pub total_distance: u64,
}

/// Builds a mosaic from a target image and a candidate library
pub struct MosaicComposer {
    config: MosaicConfig,
    progress: Option<TileProgress>,
}

impl MosaicComposer {
    /// Create a composer for `config` without progress display
    pub const fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Report per-tile progress through `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: TileProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Build configuration
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Attached progress tracker, if any
    pub const fn progress(&self) -> Option<&TileProgress> {
        self.progress.as_ref()
    }

    /// Build the mosaic and encode it to the configured output path
    ///
    /// # Errors
    ///
    /// Returns an error if any decode, match, resize, or encode step fails; no
    /// output file is written in that case
    pub fn compose(&self) -> Result<PathBuf> {
        let (pixels, _) = self.compose_pixels()?;
        encode_image(&pixels, &self.config.output_path)?;
        tracing::info!(output = %self.config.output_path.display(), "mosaic written");
        Ok(self.config.output_path.clone())
    }

    /// Build the mosaic in memory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target or any examined candidate cannot be decoded
    /// - The grid yields empty tiles or an oversized canvas
    /// - The candidate library is empty or unreadable
    pub fn compose_pixels(&self) -> Result<(PixelImage, CompositionStats)> {
        let built = self.build();
        if let Some(ref progress) = self.progress {
            progress.finish();
        }
        built
    }

    fn build(&self) -> Result<(PixelImage, CompositionStats)> {
        let started = Instant::now();
        let config = &self.config;

        let target = decode_image(&config.target_path)?;
        let (target_height, target_width, channels) = target.dim();
        let layout = TileLayout::new(
            target_height,
            target_width,
            config.grid,
            config.tile_sizing,
        )?;

        tracing::info!(
            target = %config.target_path.display(),
            rows = config.grid.rows,
            cols = config.grid.cols,
            tile_height = layout.tile_height(),
            tile_width = layout.tile_width(),
            "composing mosaic"
        );

        let resized = resize_image(
            &target,
            layout.canvas_width(),
            layout.canvas_height(),
            config.filter,
        )?;
        let mut canvas = Canvas::new(layout.canvas_height(), layout.canvas_width(), channels);

        let library = CandidateLibrary::from_directory(&config.library_dir, config.library_order)?;
        let mut matcher = CandidateMatcher::new(&library, config.cache_policy);
        let mut stats = CompositionStats::default();

        self.place_tiles(&layout, &resized, &mut canvas, &mut matcher, &mut stats)?;

        stats.match_decodes = matcher.decodes();
        let cache = matcher.cache_stats();
        tracing::info!(
            tiles = stats.tiles,
            candidates = library.len(),
            decodes = stats.match_decodes,
            cache_hits = cache.hits,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "mosaic composed"
        );

        Ok((canvas.into_pixels(), stats))
    }

    fn place_tiles(
        &self,
        layout: &TileLayout,
        resized: &PixelImage,
        canvas: &mut Canvas,
        matcher: &mut CandidateMatcher<'_>,
        stats: &mut CompositionStats,
    ) -> Result<()> {
        let filter = self.config.filter;

        for tile in layout.tiles() {
            if let Some(ref progress) = self.progress {
                progress.start_tile(&tile);
            }

            let target_color = average_color(&tile_region(resized, &tile)?)?;
            let best = matcher.find_best_match(&target_color)?;
            tracing::debug!(
                row = tile.row,
                col = tile.col,
                candidate = %best.path.display(),
                distance = best.distance,
                "matched tile"
            );

            let candidate = decode_image(best.path)?;
            let fitted = resize_image(&candidate, tile.width, tile.height, filter)?;
            canvas.paste(&tile, &fitted)?;

            stats.tiles += 1;
            stats.total_distance += u64::from(best.distance);

            if let Some(ref progress) = self.progress {
                progress.complete_tile();
            }
        }

        Ok(())
    }
}

/// Build a mosaic with default settings and write it to the default output path
///
/// # Errors
///
/// Returns an error if any step of the build fails
pub fn compose_mosaic(
    target_path: &Path,
    library_directory: &Path,
    grid: MosaicGrid,
) -> Result<PathBuf> {
    MosaicComposer::new(MosaicConfig::new(target_path, library_directory, grid)).compose()
}
