//! Per-tile progress display for mosaic builds

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::mosaic::grid::Tile;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing once per placed tile
pub struct TileProgress {
    bar: ProgressBar,
}

impl TileProgress {
    /// Create a visible progress bar for `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(TILE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(tile_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(tile_count as u64);
        Self { bar }
    }

    /// Show which tile is being matched
    pub fn start_tile(&self, tile: &Tile) {
        self.bar
            .set_message(format!("row {} col {}", tile.row, tile.col));
    }

    /// Mark the current tile as placed
    pub fn complete_tile(&self) {
        self.bar.inc(1);
    }

    /// Number of tiles marked complete so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the display has been cleared
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
