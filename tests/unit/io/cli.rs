//! Tests for command-line parsing and invocation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use photomosaic::MosaicError;
    use photomosaic::io::cli::{Cli, MosaicRunner};
    use photomosaic::io::configuration::{
        DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_OUTPUT_PATH,
        DEFAULT_TARGET_PATH,
    };
    use photomosaic::io::image::ResizeFilter;
    use photomosaic::matching::{CachePolicy, LibraryOrder};
    use photomosaic::mosaic::TileSizing;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with only the required library directory
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "--library-dir", "tiles"]);

        assert_eq!(cli.library_dir, PathBuf::from("tiles"));
        assert_eq!(cli.target_url, None);
        assert_eq!(cli.target_path, PathBuf::from(DEFAULT_TARGET_PATH));
        assert_eq!(cli.rows, DEFAULT_GRID_ROWS);
        assert_eq!(cli.cols, DEFAULT_GRID_COLS);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.fetch_timeout, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(cli.filter, ResizeFilter::Nearest);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with every option supplied
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--target-url",
            "https://example.com/target.jpg",
            "--target-path",
            "in.jpg",
            "--library-dir",
            "tiles",
            "--rows",
            "3",
            "--cols",
            "7",
            "--output",
            "out.png",
            "--subdivide",
            "--no-cache",
            "--listing-order",
            "--filter",
            "catmull-rom",
            "--fetch-timeout",
            "5",
            "--quiet",
        ]);

        assert_eq!(
            cli.target_url.as_deref(),
            Some("https://example.com/target.jpg")
        );
        assert_eq!(cli.target_path, PathBuf::from("in.jpg"));
        assert_eq!((cli.rows, cli.cols), (3, 7));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.filter, ResizeFilter::CatmullRom);
        assert_eq!(cli.fetch_timeout, 5);
        assert!(cli.quiet);

        let config = cli.mosaic_config().unwrap();
        assert_eq!(config.tile_sizing, TileSizing::Subdivide);
        assert_eq!(config.cache_policy, CachePolicy::Disabled);
        assert_eq!(config.library_order, LibraryOrder::Listing);
        assert_eq!(config.output_path, PathBuf::from("out.png"));
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "-l", "tiles", "-r", "2", "-c", "4", "-o", "m.tiff", "-vv",
        ]);

        assert_eq!(cli.library_dir, PathBuf::from("tiles"));
        assert_eq!((cli.rows, cli.cols), (2, 4));
        assert_eq!(cli.output, PathBuf::from("m.tiff"));
        assert_eq!(cli.verbose, 2);
    }

    // The output flag is also accepted as --output-path
    #[test]
    fn test_cli_output_path_alias() {
        let cli = Cli::parse_from([
            "program",
            "--library-dir",
            "tiles",
            "--output-path",
            "result.png",
        ]);
        assert_eq!(cli.output, PathBuf::from("result.png"));
    }

    // Grids whose tile count overflows fail cleanly before any I/O
    #[test]
    fn test_run_overflowing_grid() {
        let huge = usize::MAX.to_string();
        let cli = Cli::parse_from([
            "program",
            "--quiet",
            "--library-dir",
            "tiles",
            "--rows",
            huge.as_str(),
            "--cols",
            "2",
        ]);

        let result = MosaicRunner::new(cli).run();
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "grid",
                ..
            })
        ));
    }

    // Default switches map to memoized, sorted, full-target builds
    #[test]
    fn test_default_config_policies() {
        let cli = Cli::parse_from(["program", "--library-dir", "tiles"]);
        let config = cli.mosaic_config().unwrap();

        assert_eq!(config.tile_sizing, TileSizing::FullTarget);
        assert_eq!(config.cache_policy, CachePolicy::Memoize);
        assert_eq!(config.library_order, LibraryOrder::Sorted);
        assert_eq!(config.grid.tile_count(), DEFAULT_GRID_ROWS * DEFAULT_GRID_COLS);
    }

    // Tests progress display and log level based on --quiet
    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["program", "--library-dir", "tiles"]);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), tracing::Level::INFO);

        let quiet = Cli::parse_from(["program", "--library-dir", "tiles", "-q", "-v"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.log_level(), tracing::Level::WARN);
    }

    // Zero grid dimensions are rejected before any I/O
    #[test]
    fn test_zero_rows_rejected() {
        let cli = Cli::parse_from(["program", "--library-dir", "tiles", "--rows", "0"]);
        assert!(matches!(
            cli.mosaic_config(),
            Err(MosaicError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Missing library directory is required by the parser
    #[test]
    fn test_library_dir_required() {
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests error handling for a missing target file
    #[test]
    fn test_run_missing_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("missing.png");
        let output = temp_dir.path().join("out.tiff");

        let cli = Cli::parse_from([
            "program",
            "--quiet",
            "--library-dir",
            temp_dir.path().to_str().unwrap(),
            "--target-path",
            target.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        let result = MosaicRunner::new(cli).run();
        assert!(matches!(result, Err(MosaicError::Decode { .. })));
        assert!(!output.exists());
    }

    // Tests a complete local run writing the output file
    #[test]
    fn test_run_local_target() {
        let temp_dir = TempDir::new().unwrap();
        let library = temp_dir.path().join("library");
        std::fs::create_dir(&library).unwrap();
        crate::write_solid_png(&library.join("red.png"), 2, 2, [255, 0, 0]);
        crate::write_solid_png(&library.join("blue.png"), 2, 2, [0, 0, 255]);

        let target = temp_dir.path().join("target.png");
        crate::write_solid_png(&target, 3, 2, [250, 10, 10]);
        let output = temp_dir.path().join("mosaic.tiff");

        let cli = Cli::parse_from([
            "program",
            "-q",
            "-l",
            library.to_str().unwrap(),
            "--target-path",
            target.to_str().unwrap(),
            "-r",
            "2",
            "-c",
            "3",
            "-o",
            output.to_str().unwrap(),
        ]);

        let written = MosaicRunner::new(cli).run().unwrap();
        assert_eq!(written, output);

        let mosaic = image::open(&output).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (9, 4));
        assert!(mosaic.pixels().all(|p| p.0 == [255, 0, 0]));
    }
}
