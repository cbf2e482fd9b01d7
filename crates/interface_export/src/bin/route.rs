//! FNOL Intake - Routing CLI
//!
//! Runs the full intake pipeline on one extraction payload: ingest the
//! JSON, validate mandatory fields, route the claim, and print the
//! standard output document.
//!
//! # Usage
//!
//! ```bash
//! # Route a claim from a file
//! fnol-route claim.json
//!
//! # Route a claim from stdin
//! cat claim.json | fnol-route
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `FNOL_PRETTY` - Pretty-print the output JSON (default: true)

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_fnol::FnolRouter;
use interface_export::{config::IntakeConfig, ingest, output::StandardOutput};

/// Main entry point for the routing CLI.
///
/// Exits non-zero only when the input cannot be read or is not valid
/// JSON; every readable claim, however sparse, produces a routed output.
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = IntakeConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    let input = read_input().context("failed to read claim input")?;
    tracing::info!(bytes = input.len(), "claim payload read");

    let doc = ingest::parse_claim(&input).context("failed to ingest claim payload")?;
    let decision = FnolRouter::evaluate(&doc);
    tracing::info!(route = %decision.route, "claim routed");

    let output = StandardOutput::build(&doc, &decision);
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}

/// Reads the payload from the file named on the command line, or from
/// stdin when no argument is given.
fn read_input() -> anyhow::Result<String> {
    match std::env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean JSON.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
