//! ballot: command-line companion for a governance deployment.

use anyhow::Context;
use ballot_governance::{escrow, GovernanceSettings};
use ballot_types::{ProposalId, WalletAddress};
use ballot_utils::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ballot", about = "Token-weighted governance tooling")]
struct Cli {
    /// Path to a TOML settings file. If provided, file settings are used
    /// as the base; CLI flags and env vars override them.
    #[arg(long, env = "BALLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Governance contract address (owner of every escrow account).
    #[arg(long, env = "BALLOT_CONTRACT")]
    contract: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Derive the escrow account a voter's stake on a proposal is locked in.
    #[command(name = "escrow-address")]
    EscrowAddress {
        /// Voter wallet address.
        #[arg(long)]
        voter: String,

        /// Proposal identifier (decimal).
        #[arg(long)]
        proposal: String,

        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective settings as TOML.
    #[command(name = "config")]
    Config,
}

fn load_settings(cli: &Cli) -> anyhow::Result<GovernanceSettings> {
    let mut settings = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            GovernanceSettings::from_toml_file(&path)
                .with_context(|| format!("failed to load settings from {path}"))?
        }
        None => GovernanceSettings::default(),
    };
    if let Some(contract) = &cli.contract {
        settings.contract_address = WalletAddress::parse(contract.as_str())?;
    }
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        settings.log_format = format.clone();
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let format: LogFormat = settings.log_format.parse()?;
    ballot_utils::init_logging(format, &settings.log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!("Loaded settings from {}", path.display());
    }

    match cli.command {
        Command::EscrowAddress {
            voter,
            proposal,
            json,
        } => {
            let voter = WalletAddress::parse(voter)?;
            let proposal: ProposalId = proposal.parse()?;
            let seed = escrow::virtual_hash(&voter, proposal);
            let address = escrow::escrow_address(&settings.contract_address, &voter, proposal);
            tracing::debug!(%voter, %proposal, %address, "derived escrow address");
            if json {
                let out = serde_json::json!({
                    "contract": settings.contract_address.as_str(),
                    "voter": voter.as_str(),
                    "proposal": proposal.to_string(),
                    "virtual_hash": seed.to_string(),
                    "address": address.as_str(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("virtual hash: {seed}");
                println!("address:      {address}");
            }
        }
        Command::Config => {
            print!("{}", settings.to_toml_string()?);
        }
    }
    Ok(())
}
