//! Context creation attributes.
//!
//! The bootstrap layer never interprets these; they are handed to the surface
//! unchanged for every kind it tries. Unset fields are left for the host to
//! default.

use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};

/// GPU selection hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    Default,
    HighPerformance,
    LowPower,
}

/// Optional context creation attributes (`alpha`, `antialias`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stencil: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antialias: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premultiplied_alpha: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_drawing_buffer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_preference: Option<PowerPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_major_performance_caveat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desynchronized: Option<bool>,
}

impl ContextAttributes {
    /// Parses attributes from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::InvalidAttributes` for malformed JSON or
    /// wrongly typed fields.
    pub fn from_json(json: &str) -> Result<Self, BootstrapError> {
        serde_json::from_str(json).map_err(|e| BootstrapError::InvalidAttributes(e.to_string()))
    }

    /// True if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attributes_are_empty() {
        assert!(ContextAttributes::default().is_empty());
    }

    #[test]
    fn from_json_reads_camel_case_keys() {
        let attrs = ContextAttributes::from_json(
            r#"{"alpha": false, "premultipliedAlpha": true, "powerPreference": "high-performance"}"#,
        )
        .unwrap();
        assert_eq!(attrs.alpha, Some(false));
        assert_eq!(attrs.premultiplied_alpha, Some(true));
        assert_eq!(attrs.power_preference, Some(PowerPreference::HighPerformance));
        assert_eq!(attrs.antialias, None);
        assert!(!attrs.is_empty());
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        let err = ContextAttributes::from_json(r#"{"antialias": "yes"}"#).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidAttributes(_)));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let attrs = ContextAttributes {
            stencil: Some(true),
            ..ContextAttributes::default()
        };
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json, serde_json::json!({"stencil": true}));
    }
}
