//! JSON description of a simulated host.
//!
//! A profile lists, per context kind, the members the native context exposes
//! and the extensions it grants. A member is either a numeric constant or the
//! string `"function"`:
//!
//! ```json
//! {
//!   "contexts": {
//!     "webgl": {
//!       "native": { "drawArrays": "function", "TRIANGLES": 4 },
//!       "extensions": {
//!         "ANGLE_instanced_arrays": {
//!           "drawArraysInstancedANGLE": "function",
//!           "VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE": 35070
//!         }
//!       }
//!     }
//!   }
//! }
//! ```

use crate::error::ProfileError;
use glboot_core::{ContextKind, GlEnum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Marker deserialized from the string `"function"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionMarker {
    #[serde(rename = "function")]
    Function,
}

/// A member as written in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberSpec {
    Constant(GlEnum),
    Function(FunctionMarker),
}

impl MemberSpec {
    pub fn is_function(self) -> bool {
        matches!(self, MemberSpec::Function(_))
    }
}

/// Members of one extension, keyed by their suffixed names.
pub type ExtensionSpec = BTreeMap<String, MemberSpec>;

/// What the host exposes for one context kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextProfile {
    #[serde(default)]
    pub native: BTreeMap<String, MemberSpec>,
    #[serde(default)]
    pub extensions: BTreeMap<String, ExtensionSpec>,
}

/// A complete simulated host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProfile {
    #[serde(default)]
    pub description: String,
    /// Deny every context when the caller sets `failIfMajorPerformanceCaveat`.
    #[serde(default)]
    pub major_performance_caveat: bool,
    #[serde(default)]
    pub contexts: BTreeMap<ContextKind, ContextProfile>,
}

impl HostProfile {
    /// Parses a profile from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Parse` for malformed JSON, unknown context kinds
    /// or members that are neither a non-negative integer nor `"function"`.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a profile file.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Io` if the file cannot be read, otherwise as
    /// [`HostProfile::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ANGLE_PROFILE: &str = r#"{
        "description": "test",
        "contexts": {
            "webgl": {
                "native": { "drawArrays": "function", "TRIANGLES": 4 },
                "extensions": {
                    "ANGLE_instanced_arrays": {
                        "drawArraysInstancedANGLE": "function",
                        "VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE": 35070
                    }
                }
            }
        }
    }"#;

    #[test]
    fn parses_members_as_functions_or_constants() {
        let profile = HostProfile::from_json(ANGLE_PROFILE).unwrap();
        let webgl = &profile.contexts[&ContextKind::WebGl];
        assert!(webgl.native["drawArrays"].is_function());
        assert_eq!(webgl.native["TRIANGLES"], MemberSpec::Constant(4));
        let angle = &webgl.extensions["ANGLE_instanced_arrays"];
        assert_eq!(
            angle["VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE"],
            MemberSpec::Constant(35070)
        );
        assert!(!profile.major_performance_caveat);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let profile = HostProfile::from_json(r#"{"contexts": {"webgl2": {}}}"#).unwrap();
        let ctx = &profile.contexts[&ContextKind::WebGl2];
        assert!(ctx.native.is_empty());
        assert!(ctx.extensions.is_empty());
        assert_eq!(profile.description, "");
    }

    #[test]
    fn rejects_unknown_member_marker() {
        let err = HostProfile::from_json(
            r#"{"contexts": {"webgl": {"native": {"drawArrays": "method"}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn rejects_negative_constants() {
        let err =
            HostProfile::from_json(r#"{"contexts": {"webgl": {"native": {"X": -1}}}}"#).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_context_kind() {
        let err = HostProfile::from_json(r#"{"contexts": {"webgpu": {}}}"#).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn from_path_reads_profile_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ANGLE_PROFILE.as_bytes()).unwrap();
        let profile = HostProfile::from_path(file.path()).unwrap();
        assert_eq!(profile.description, "test");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = HostProfile::from_path(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }
}
