//! Context kind identifiers and the fixed fallback orders.

use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rendering context flavor a surface can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    #[serde(rename = "webgl2")]
    WebGl2,
    #[serde(rename = "webgl")]
    WebGl,
    #[serde(rename = "experimental-webgl")]
    ExperimentalWebGl,
}

/// Every kind, highest capability first.
pub const CONTEXT_KINDS: &[ContextKind] = &[
    ContextKind::WebGl2,
    ContextKind::WebGl,
    ContextKind::ExperimentalWebGl,
];

/// WebGL1 kinds only, for callers that must not receive a WebGL2 context.
pub const WEBGL1_CONTEXT_KINDS: &[ContextKind] =
    &[ContextKind::WebGl, ContextKind::ExperimentalWebGl];

impl ContextKind {
    /// The identifier passed to the host surface.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::WebGl2 => "webgl2",
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
        }
    }

    pub fn is_webgl2(self) -> bool {
        self == ContextKind::WebGl2
    }

    pub fn is_webgl1(self) -> bool {
        !self.is_webgl2()
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextKind {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CONTEXT_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BootstrapError::UnknownContextKind(s.to_string()))
    }
}
