//! Command-line entry point.
//!
//! Run with:
//!     dmf2csv <input-file> <output-file>

use std::env;
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dmf2csv::{ConvertConfig, Converter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        println!("Usage: dmf2csv <input-file> <output-file>");
        return;
    };

    let converter = Converter::new(ConvertConfig::default());
    match converter.convert_path(Path::new(&input), Path::new(&output)) {
        Ok(summary) => info!(
            records = summary.records_written,
            skipped = summary.lines_skipped,
            blocks = summary.blocks_processed,
            "conversion complete"
        ),
        Err(e) => error!("conversion failed: {}", e),
    }
}
