//! # Settings Loading
//!
//! Reads `MachineSettings` from TOML files or builds them from CLI flags.

use crate::error::CliError;
use enigma_core::primitives::{DEFAULT_PLUG_LEADS, MIN_RING_SETTING};
use enigma_core::{MachineSettings, PlugboardSettings, ReflectorSettings, RotorSettings};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a settings file (1 MB).
pub const MAX_SETTINGS_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size of a message file (16 MB).
pub const MAX_MESSAGE_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Resolve a path and make sure it names a regular file.
pub fn validate_file_path(path: &Path) -> Result<PathBuf, CliError> {
    let canonical = path.canonicalize().map_err(|e| CliError::InvalidPath {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !canonical.is_file() {
        return Err(CliError::InvalidPath {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }
    Ok(canonical)
}

/// Check file size before reading.
fn validate_file_size(path: &Path, max: u64) -> Result<(), CliError> {
    let metadata = std::fs::metadata(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > max {
        return Err(CliError::FileTooLarge {
            size: metadata.len(),
            max,
        });
    }
    Ok(())
}

/// Read a whole text file after path and size checks.
pub fn read_text_file(path: &Path, max: u64) -> Result<String, CliError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max)?;
    std::fs::read_to_string(&validated).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// TOML
// =============================================================================

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<MachineSettings, CliError> {
    toml::from_str(content).map_err(|e| CliError::Parse(e.to_string()))
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<MachineSettings, CliError> {
    tracing::debug!("Loading settings from {:?}", path);
    let content = read_text_file(path, MAX_SETTINGS_FILE_SIZE)?;
    parse_settings(&content)
}

// =============================================================================
// FLAGS
// =============================================================================

/// Machine description given on the command line.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct MachineFlags {
    /// Rotor names, left to right (e.g. "I II III" or "Beta II IV I")
    #[arg(long, default_value = "I II III")]
    pub rotors: String,

    /// Ring settings, one per rotor (default: all 1)
    #[arg(long)]
    pub rings: Option<String>,

    /// Initial window letters, one per rotor (default: all A)
    #[arg(long)]
    pub positions: Option<String>,

    /// Reflector name
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Plug leads (e.g. "AB CD EF")
    #[arg(long, default_value = "")]
    pub plugs: String,

    /// Plugboard capacity (0-13)
    #[arg(long, default_value_t = DEFAULT_PLUG_LEADS)]
    pub capacity: usize,
}

impl Default for MachineFlags {
    fn default() -> Self {
        Self {
            rotors: "I II III".to_string(),
            rings: None,
            positions: None,
            reflector: "B".to_string(),
            plugs: String::new(),
            capacity: DEFAULT_PLUG_LEADS,
        }
    }
}

impl MachineFlags {
    /// Translate flags into settings. Component validation is left to
    /// `MachineSettings::build`; this only checks the per-rotor lists line up.
    pub fn to_settings(&self) -> Result<MachineSettings, CliError> {
        let names: Vec<&str> = self.rotors.split_whitespace().collect();
        let count = names.len();

        let rings = match &self.rings {
            Some(rings) => rings
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| CliError::Flag {
                        flag: "--rings",
                        reason: format!("'{}' is not a number", token),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![MIN_RING_SETTING; count],
        };
        if rings.len() != count {
            return Err(CliError::Flag {
                flag: "--rings",
                reason: format!("expected {} values, found {}", count, rings.len()),
            });
        }

        let positions: Vec<String> = match &self.positions {
            Some(positions) => positions.trim().chars().map(String::from).collect(),
            None => vec!["A".to_string(); count],
        };
        if positions.len() != count {
            return Err(CliError::Flag {
                flag: "--positions",
                reason: format!("expected {} letters, found {}", count, positions.len()),
            });
        }

        let rotors = names
            .into_iter()
            .zip(rings)
            .zip(positions)
            .zip(1..)
            .map(|(((name, ring), position), order)| {
                RotorSettings::catalog(name, ring, position, order)
            })
            .collect();

        Ok(MachineSettings {
            rotors,
            reflector: ReflectorSettings::Named(self.reflector.clone()),
            plugboard: PlugboardSettings {
                leads: self.plugs.clone(),
                capacity: self.capacity,
            },
        })
    }
}

/// Settings from a file when given, otherwise from flags.
pub fn resolve_settings(
    config: Option<&Path>,
    flags: &MachineFlags,
) -> Result<MachineSettings, CliError> {
    match config {
        Some(path) => load_settings(path),
        None => flags.to_settings(),
    }
}
