//! # CLI Errors

use enigma_core::EnigmaError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected machine settings or message.
    #[error(transparent)]
    Enigma(#[from] EnigmaError),

    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid file path '{}': {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("File size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Invalid flag {flag}: {reason}")]
    Flag { flag: &'static str, reason: String },

    #[error("Nothing to encode: pass TEXT or --file")]
    NoInput,
}
