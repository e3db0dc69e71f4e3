//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::{
    MAX_MESSAGE_FILE_SIZE, MachineFlags, load_settings, read_text_file, resolve_settings,
};
use crate::error::CliError;
use crate::output::{CatalogReport, EncodeReport, MachineSummary};
use crate::trace::TracingSink;
use enigma_core::{EnigmaError, MachineSettings};
use std::path::{Path, PathBuf};

// =============================================================================
// ENCODE COMMAND
// =============================================================================

/// Arguments of `enigma encode`.
#[derive(Debug, Clone, Default)]
pub struct EncodeRequest {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub machine: MachineFlags,
    pub trace: bool,
}

/// Message from the positional text or `--file`, whitespace removed.
pub fn read_message(text: Option<&str>, file: Option<&Path>) -> Result<String, CliError> {
    let raw = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => {
            tracing::info!("Reading message from {:?}", path);
            read_text_file(path, MAX_MESSAGE_FILE_SIZE)?
        }
        (None, None) => return Err(CliError::NoInput),
    };
    Ok(raw.split_whitespace().collect())
}

/// Build the machine and encode one message.
pub fn encode_message(
    settings: &MachineSettings,
    message: &str,
    trace: bool,
) -> Result<EncodeReport, CliError> {
    let mut machine = settings.build()?;
    let start_window = machine.window();
    tracing::info!(
        "Encoding {} letters from window {}",
        message.len(),
        start_window
    );

    let mut sink = TracingSink::new(trace);
    let output = machine
        .encode_traced(message, &mut sink)
        .map_err(EnigmaError::from)?;

    tracing::debug!("Finished at window {}", machine.window());
    Ok(EncodeReport {
        input: message.to_uppercase(),
        output,
        start_window,
        end_window: machine.window(),
        machine: MachineSummary::from(&machine),
        trace: sink.lines(),
    })
}

/// Encode a message and print the result.
pub fn cmd_encode(request: &EncodeRequest, json_mode: bool, verbose: bool) -> Result<(), CliError> {
    let settings = resolve_settings(request.config.as_deref(), &request.machine)?;
    let message = read_message(request.text.as_deref(), request.file.as_deref())?;
    let report = encode_message(&settings, &message, request.trace)?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
        return Ok(());
    }

    if verbose {
        println!("{}", settings.build()?);
    }
    for line in &report.trace {
        println!("{}", line);
    }
    println!("{}", report.output);

    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a settings file and print the machine.
pub fn cmd_check(config: &Path, json_mode: bool) -> Result<(), CliError> {
    let machine = load_settings(config)?.build()?;
    tracing::info!("Settings in {:?} are valid", config);

    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "machine": MachineSummary::from(&machine),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Enigma Machine");
    println!("==============");
    println!("{}", machine);

    Ok(())
}

// =============================================================================
// CATALOG COMMAND
// =============================================================================

/// List catalog rotors and reflectors.
pub fn cmd_catalog(json_mode: bool) -> Result<(), CliError> {
    let report = CatalogReport::collect();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Rotors");
    println!("======");
    for rotor in &report.rotors {
        let notches = if rotor.notches.is_empty() {
            "-"
        } else {
            rotor.notches.as_str()
        };
        println!("  {:<6} {}  notches {}", rotor.name, rotor.wiring, notches);
    }
    println!();
    println!("Reflectors");
    println!("==========");
    for reflector in &report.reflectors {
        println!("  {:<6} {}", reflector.name, reflector.wiring);
    }

    Ok(())
}
