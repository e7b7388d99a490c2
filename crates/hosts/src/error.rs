//! Errors produced while loading host profiles.

use thiserror::Error;

/// Errors produced by profile loading and preset lookup.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The profile JSON was malformed or had an invalid member.
    #[error("invalid host profile: {0}")]
    Parse(#[from] serde_json::Error),

    /// The profile file could not be read.
    #[error("failed to read host profile '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_includes_name() {
        let err = ProfileError::UnknownPreset("webgpu-desktop".into());
        assert!(err.to_string().contains("webgpu-desktop"));
    }

    #[test]
    fn io_error_includes_path() {
        let err = ProfileError::Io {
            path: "/tmp/missing.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"), "missing path in: {msg}");
        assert!(msg.contains("not found"), "missing cause in: {msg}");
    }

    #[test]
    fn parse_error_converts_from_serde_json() {
        let bad = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = ProfileError::from(bad);
        assert!(matches!(err, ProfileError::Parse(_)));
    }
}
