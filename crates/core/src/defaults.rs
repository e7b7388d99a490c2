//! Bootstrap defaults and the merge that updates them.
//!
//! A merge only touches keys the current defaults already recognize; unknown
//! keys are ignored so newer callers can pass options older builds lack.
//! Recognized keys with the wrong JSON type are rejected and nothing is
//! applied.

use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON key for [`Defaults::add_extensions_to_context`].
pub const ADD_EXTENSIONS_TO_CONTEXT: &str = "addExtensionsToContext";

/// Options that shape context acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Normalize every supported extension onto newly acquired contexts.
    pub add_extensions_to_context: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            add_extensions_to_context: true,
        }
    }
}

impl Defaults {
    /// Merges recognized keys from `partial` into these defaults.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::DefaultsNotObject` if `partial` is not an
    /// object, or `BootstrapError::DefaultsTypeMismatch` if a recognized key
    /// holds the wrong type. On error the defaults are left unchanged.
    pub fn apply(&mut self, partial: &Value) -> Result<(), BootstrapError> {
        let map = partial
            .as_object()
            .ok_or_else(|| BootstrapError::DefaultsNotObject(json_type(partial).to_string()))?;

        let mut next = self.clone();
        for (key, value) in map {
            match key.as_str() {
                ADD_EXTENSIONS_TO_CONTEXT => {
                    next.add_extensions_to_context =
                        value
                            .as_bool()
                            .ok_or_else(|| BootstrapError::DefaultsTypeMismatch {
                                key: key.clone(),
                                expected: "bool".into(),
                                got: json_type(value).into(),
                            })?;
                }
                other => log::debug!("ignoring unrecognized defaults key '{other}'"),
            }
        }

        *self = next;
        Ok(())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
