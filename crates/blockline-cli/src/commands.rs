use std::path::Path;

use anyhow::Context;
use blockline_ledger::{EntryFactory, EntryValidator};
use blockline_server::{BlocklineServer, ServerConfig};
use blockline_types::Entry;
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Genesis => cmd_genesis(),
        Command::Verify(args) => cmd_verify(&args.path),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    load_env_file(args.env_file.as_deref())?;
    let config = load_config(&args)?;
    tracing::info!(
        bind = %config.bind_addr,
        origins = ?config.allowed_origins,
        "starting Blockline server"
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(BlocklineServer::new(config).serve())
        .context("server terminated with an error")
}

/// Load `KEY=value` pairs into the process environment. Variables already
/// set are left alone. Without an explicit path a missing `./.env` is fine.
fn load_env_file(path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded env file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("failed to load .env"),
        },
    }
    Ok(())
}

fn load_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    let config = config.with_env_overrides()?;
    match &args.bind {
        Some(bind) => Ok(config.with_bind(bind)?),
        None => Ok(config),
    }
}

fn cmd_genesis() -> anyhow::Result<()> {
    let genesis = EntryFactory::default().create_genesis();
    println!("{}", serde_json::to_string_pretty(&genesis)?);
    Ok(())
}

fn cmd_verify(path: &Path) -> anyhow::Result<()> {
    let entries = read_dump(path)?;
    match EntryValidator::validate_sequence(&entries) {
        Ok(()) => {
            println!(
                "{} {} entries, chain intact",
                "✓".green().bold(),
                entries.len().to_string().bold()
            );
            if let Some(tail) = entries.last() {
                println!("  Tip: #{} {}", tail.sequence_number, tail.fingerprint.to_hex().yellow());
            }
            Ok(())
        }
        Err(failure) => {
            println!("{} {}", "✗".red().bold(), failure);
            anyhow::bail!("ledger dump {} failed verification", path.display())
        }
    }
}

fn read_dump(path: &Path) -> anyhow::Result<Vec<Entry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a ledger dump", path.display()))
}
