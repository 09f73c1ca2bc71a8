use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blockline",
    about = "Blockline: append-only, hash-linked transaction ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger HTTP server
    Serve(ServeArgs),
    /// Print a freshly computed genesis entry
    Genesis,
    /// Verify the hash chain of a ledger dump (JSON array of entries)
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address; overrides the config file and $ADDR
    #[arg(long)]
    pub bind: Option<String>,
    /// Environment file to load before reading $ADDR (default: ./.env if present)
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub path: PathBuf,
}
