//! # enigma
//!
//! Command-line front end for `enigma-core`: settings files, flags,
//! JSON reports and logging.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod trace;

pub use error::CliError;
