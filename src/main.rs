//! CLI entry point for the photo mosaic builder

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};
use photomosaic::io::logging::init_logging;

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let runner = MosaicRunner::new(cli);
    runner.run().map(|_| ())
}
