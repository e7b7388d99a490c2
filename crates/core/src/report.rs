//! Serializable summary of a bootstrapped context.

use crate::context::RenderingContext;
use crate::kind::ContextKind;
use crate::normalize::ConstantConflict;
use crate::value::{GlEnum, Member};
use serde::Serialize;
use std::collections::BTreeMap;

/// How an installed name is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum InstalledMember {
    Function,
    Constant(GlEnum),
}

/// What normalization did to a context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextReport {
    pub kind: ContextKind,
    pub native_members: usize,
    pub enabled_extensions: Vec<String>,
    pub installed: BTreeMap<String, InstalledMember>,
    pub conflicts: Vec<ConstantConflict>,
}

impl ContextReport {
    /// Captures the current state of `gl`.
    pub fn from_context(gl: &RenderingContext) -> Self {
        let installed = gl
            .installed()
            .map(|(name, member)| {
                let summary = match member {
                    Member::Function(_) => InstalledMember::Function,
                    Member::Constant(v) => InstalledMember::Constant(*v),
                };
                (name.to_string(), summary)
            })
            .collect();

        Self {
            kind: gl.kind(),
            native_members: gl.host().native_member_names().len(),
            enabled_extensions: gl.enabled_extensions().map(String::from).collect(),
            installed,
            conflicts: gl.conflicts().to_vec(),
        }
    }
}
