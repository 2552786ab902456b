use std::path::PathBuf;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Read the torrents summary snapshot from this file instead of stdin.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Skip the reset-compensating ledger pass even when enabled in config.toml.
    #[arg(long)]
    pub no_ledger: bool,

    /// Print rows as a JSON document instead of a table.
    #[arg(long)]
    pub json: bool,
}
