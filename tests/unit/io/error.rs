//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{computation_error, file_system_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining for file system failures
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/tiles", "read directory", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read directory"));
        assert!(message.contains("/tmp/tiles"));
    }

    // Tests Fetch error names URL and reason
    #[test]
    fn test_fetch_error() {
        let error = MosaicError::Fetch {
            url: "http://example.com/a.jpg".to_string(),
            reason: "server responded with status 404".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("http://example.com/a.jpg"));
        assert!(message.contains("404"));
        assert!(error.source().is_none());
    }

    // Tests Decode error with image source
    #[test]
    fn test_decode_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::Decode {
            path: PathBuf::from("/restricted/tile.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/tile.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests EmptyRegion error reports dimensions
    #[test]
    fn test_empty_region_error() {
        let error = MosaicError::EmptyRegion {
            height: 0,
            width: 12,
        };
        assert!(error.to_string().contains("0x12"));
    }

    // Tests InvalidParameter helper contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("rows", &0, &"must be at least 1");

        let message = error.to_string();
        assert!(message.contains("rows"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
    }

    // Tests Computation helper formatting
    #[test]
    fn test_computation_error() {
        let error = computation_error("pixel conversion", &"buffer too short");

        let message = error.to_string();
        assert!(message.contains("pixel conversion"));
        assert!(message.contains("buffer too short"));
    }
}
