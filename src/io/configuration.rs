//! Runtime configuration defaults

// Default invocation parameters
/// Local file the target image is downloaded to, or read from
pub const DEFAULT_TARGET_PATH: &str = "target_image.jpg";
/// Output file for the finished mosaic
pub const DEFAULT_OUTPUT_PATH: &str = "mosaic.tiff";
/// Number of tile rows in the mosaic grid
pub const DEFAULT_GRID_ROWS: usize = 5;
/// Number of tile columns in the mosaic grid
pub const DEFAULT_GRID_COLS: usize = 5;

// Network settings
/// Overall timeout for downloading the target image
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

// Image buffers address each side with a u32
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: usize = u32::MAX as usize;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
