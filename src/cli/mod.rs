mod handlers;
pub mod parse;

use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use handlers::{process_input, prompt, read_batch};
pub use parse::Cli;

use crate::core::error::FestError;

pub fn run() -> Result<(), FestError> {
    let cli = parse::Cli::parse();
    init_logging(cli.verbose);
    let cfg = cli.config()?;
    debug!("{cfg:?}");
    handlers::run(&cfg)
}

/// Message-only logs on stderr; `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
