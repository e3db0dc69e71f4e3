//! # Enigma - Rotor Machine Simulator
//!
//! The main binary for the Enigma simulator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            apps/enigma (THE BINARY)          │
//! │                                              │
//! │   ┌─────────────┐      ┌──────────────────┐  │
//! │   │    CLI      │      │ Settings (TOML)  │  │
//! │   │   (clap)    │      │ Reports (JSON)   │  │
//! │   └──────┬──────┘      └────────┬─────────┘  │
//! │          └──────────┬───────────┘            │
//! │                     ▼                        │
//! │             ┌───────────────┐                │
//! │             │  enigma-core  │                │
//! │             │ (THE MACHINE) │                │
//! │             └───────────────┘                │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! enigma encode --rotors "I II III" --positions AAZ --reflector B A
//! enigma encode -c machine.toml -f message.txt --trace
//! enigma check -c machine.toml
//! enigma catalog --json-mode
//! ```

use clap::Parser;
use enigma::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first: --verbose/--quiet pick the default filter.
    let cli = cli::Cli::parse();

    // Initialize tracing — ENIGMA_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so stdout carries only the result.
    let log_format = std::env::var("ENIGMA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.default_log_filter().into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
