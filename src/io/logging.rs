//! Tracing subscriber setup for the command-line binary

use tracing::Level;

/// Map CLI verbosity flags to a maximum log level
///
/// Quiet wins over any number of verbose flags.
pub const fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a formatting subscriber writing to stderr
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
