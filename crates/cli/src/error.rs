//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: bootstrap error (no context could be acquired, bad defaults)
//! - 11: I/O error (profile file unreadable)
//! - 12: input error (unknown preset, bad JSON arguments, bad profile)
//! - 13: serialization error

use glboot_core::BootstrapError;
use glboot_hosts::ProfileError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A bootstrap-level error (no supported context, rejected defaults).
    Bootstrap(String),
    /// An I/O error (profile file read).
    Io(String),
    /// A user input error (unknown preset, malformed JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Bootstrap(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Bootstrap(msg) => write!(f, "{msg}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<BootstrapError> for CliError {
    fn from(e: BootstrapError) -> Self {
        match e {
            BootstrapError::InvalidAttributes(_) => CliError::Input(e.to_string()),
            other => CliError::Bootstrap(other.to_string()),
        }
    }
}

impl From<ProfileError> for CliError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::Io { .. } => CliError::Io(e.to_string()),
            other => CliError::Input(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_error_exit_code_is_10() {
        let err = CliError::Bootstrap("no rendering context".into());
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("read failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad preset".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_defaults_mismatch_routes_to_bootstrap() {
        let err = CliError::from(BootstrapError::DefaultsTypeMismatch {
            key: "addExtensionsToContext".into(),
            expected: "bool".into(),
            got: "number".into(),
        });
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("addExtensionsToContext"));
    }

    #[test]
    fn from_invalid_attributes_routes_to_input() {
        let err = CliError::from(BootstrapError::InvalidAttributes("alpha".into()));
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn from_profile_io_routes_to_cli_io() {
        let err = CliError::from(ProfileError::Io {
            path: "missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn from_unknown_preset_routes_to_input() {
        let err = CliError::from(ProfileError::UnknownPreset("xyz".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
