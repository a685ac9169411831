//! Magic chess in the terminal.
//!
//! ```bash
//! cargo run -p terminal -- --config magic-chess.toml
//! ```

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::{Ledger, Settings, DEFAULT_CONFIG_PATH};
use terminal::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // The board owns stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config_path = match args.iter().position(|a| a == "--config") {
        Some(pos) => PathBuf::from(args.get(pos + 1).context("--config needs a file path")?),
        None => PathBuf::from(DEFAULT_CONFIG_PATH),
    };
    let settings = Settings::load_or_default(&config_path)?;

    let ledger = Ledger::open(&settings.store_path)
        .with_context(|| format!("opening {}", settings.store_path.display()))?;

    let stdin = io::stdin();
    let mut session = Session::new(settings, ledger, io::stdout());
    session.run(stdin.lock())
}
