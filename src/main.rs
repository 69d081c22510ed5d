//! logkit demo - minimal usage of the logger builder.
//!
//! Builds a named logger, logs one message at INFO, and exits 0.

use clap::Parser;

use logkit::{FileOptions, LoggerRegistry};

/// Demonstrates idempotent logger setup
#[derive(Parser, Debug)]
#[command(name = "logkit-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Logger name (also the log file stem when --file is set)
    #[arg(short, long, default_value = "testlogger")]
    name: String,

    /// Message to log at INFO level
    #[arg(short, long, default_value = "hello from logkit")]
    message: String,

    /// Attach a file handler writing to <output_dir>/<name>.log
    #[arg(short, long)]
    file: bool,
}

fn main() {
    let cli = Cli::parse();

    let registry = LoggerRegistry::global();
    let mut builder = registry.builder(&cli.name);
    if cli.file {
        builder = builder.file(FileOptions::default());
    }

    let logger = builder.build();
    logger.info(&cli.message);
}
