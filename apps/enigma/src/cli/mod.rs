//! # Enigma CLI Module
//!
//! This module implements the CLI interface for the simulator.
//!
//! ## Available Commands
//!
//! - `encode` - Encode (or decode) a message
//! - `check` - Validate a settings file and show the machine
//! - `catalog` - List catalog rotors and reflectors

mod commands;

use crate::config::MachineFlags;
use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Enigma - rotor machine simulator
///
/// Letter-exact simulation of the plugboard, rotor stack, reflector and
/// double-stepping mechanism. Encoding is reciprocal: run the ciphertext
/// through a machine with the same settings to read the message.
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging, machine summary)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a message (the same operation decodes)
    Encode {
        /// Message text; whitespace is ignored
        text: Option<String>,

        /// Read the message from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Settings file (TOML); overrides the machine flags
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        machine: MachineFlags,

        /// Print every stage of the signal path
        #[arg(long)]
        trace: bool,
    },

    /// Validate a settings file and show the machine it describes
    Check {
        /// Settings file (TOML)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List catalog rotors and reflectors
    Catalog,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "enigma=debug"
        } else if self.quiet {
            "enigma=warn"
        } else {
            "enigma=info"
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Encode {
            text,
            file,
            config,
            machine,
            trace,
        }) => {
            let request = EncodeRequest {
                text,
                file,
                config,
                machine,
                trace,
            };
            cmd_encode(&request, json_mode, cli.verbose)
        }
        Some(Commands::Check { config }) => cmd_check(&config, json_mode),
        Some(Commands::Catalog) => cmd_catalog(json_mode),
        None => {
            // No subcommand - list the catalog by default
            cmd_catalog(json_mode)
        }
    }
}
