//! CLI entry point for block, triangle and picture mosaic generation

use clap::Parser;
use mosaicmaker::io::cli::{Cli, FileProcessor};

fn main() -> mosaicmaker::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over -v
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
