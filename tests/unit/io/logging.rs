//! Tests for verbosity mapping and subscriber installation

#[cfg(test)]
mod tests {
    use photomosaic::io::logging::{init_logging, level_for};
    use tracing::Level;

    // Each verbose flag raises detail until trace
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), Level::INFO);
        assert_eq!(level_for(1, false), Level::DEBUG);
        assert_eq!(level_for(2, false), Level::TRACE);
        assert_eq!(level_for(9, false), Level::TRACE);
    }

    // Quiet overrides verbosity
    #[test]
    fn test_level_for_quiet() {
        assert_eq!(level_for(0, true), Level::WARN);
        assert_eq!(level_for(3, true), Level::WARN);
    }

    // Only the first installation succeeds
    #[test]
    fn test_init_logging_once() {
        assert!(init_logging(Level::WARN));
        assert!(!init_logging(Level::DEBUG));
    }
}
