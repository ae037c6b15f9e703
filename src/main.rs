//! Plinko Fair command line.
//!
//! Runs rounds and verifies revealed ones. Results go to stdout as JSON;
//! logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use plinko_fair::{
    core::rng::DeterministicRng,
    seed_from_hex, verify, EngineConfig, PegMap, Round, VerifyRequest, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "plinko-fair")]
#[command(about = "Provably-fair Plinko rounds: commit, play and verify")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a round and print its commitment together with the hidden secret
    Commit {
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Run a full round: commit, start, reveal and self-verify
    Play {
        #[arg(long)]
        client_seed: String,
        #[arg(long, allow_negative_numbers = true)]
        drop_column: i64,
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Recompute every published value of a revealed round
    Verify {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long)]
        nonce: String,
        #[arg(long, allow_negative_numbers = true)]
        drop_column: i64,
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Print the peg map for a combined seed
    PegMap {
        #[arg(long)]
        combined_seed: String,
        #[arg(long)]
        rows: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let cli = Cli::parse();
    let config = EngineConfig::from_env();
    info!("Plinko Fair v{}", VERSION);

    match cli.command {
        Commands::Commit { rows } => {
            let rows = config.validate_rows(rows.unwrap_or(config.rows))?;
            let round = Round::commit(rows)?;
            let view = round.public_view();
            // The operator keeps the secret; everything else is public.
            print_json(&json!({
                "round": view,
                "serverSeed": round.sealed_secret().as_str(),
            }))?;
        }
        Commands::Play { client_seed, drop_column, rows } => {
            let rows = config.validate_rows(rows.unwrap_or(config.rows))?;
            let mut round = Round::commit(rows)?;
            let committed = round.public_view();

            round.start(&client_seed, drop_column)?;
            let started = round.public_view();

            round.reveal()?;
            let revealed = round.public_view();

            let request = round
                .verification_request()
                .context("revealed round has no verification request")?;
            let published = round.published().context("started round has no outcome")?;
            let response = verify(&request)?;
            let verified = match response.check(&published) {
                Ok(()) => true,
                Err(err) => {
                    warn!("Self-verification failed: {}", err);
                    false
                }
            };

            print_json(&json!({
                "committed": committed,
                "started": started,
                "revealed": revealed,
                "verification": response,
                "verified": verified,
            }))?;
        }
        Commands::Verify { server_seed, client_seed, nonce, drop_column, rows } => {
            let request = VerifyRequest {
                server_seed,
                client_seed,
                nonce,
                drop_column,
                rows: rows.or(Some(config.rows)),
            };
            let response = verify(&request)?;
            info!("Recomputed bin {} with path {}", response.bin_index, response.path);
            print_json(&response)?;
        }
        Commands::PegMap { combined_seed, rows } => {
            let rows = config.validate_rows(rows.unwrap_or(config.rows))?;
            let mut rng = DeterministicRng::new(seed_from_hex(&combined_seed)?);
            let peg_map = PegMap::generate(&mut rng, rows);
            print_json(&json!({
                "pegMap": peg_map,
                "pegMapHash": peg_map.hash(),
            }))?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{text}");
    Ok(())
}
