#![deny(unsafe_code)]
//! Rendering-context bootstrap for WebGL-style hosts.
//!
//! Acquires a context from a host surface by trying context kinds newest
//! first ([`ContextAcquirer`]), then folds every supported extension into the
//! context's own namespace under canonical, unsuffixed names
//! ([`normalize`]). Hosts plug in through the [`Surface`] and
//! [`HostContext`] traits.

pub mod acquire;
pub mod attributes;
pub mod context;
pub mod defaults;
pub mod error;
pub mod extension;
pub mod host;
pub mod kind;
pub mod normalize;
pub mod report;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use acquire::ContextAcquirer;
pub use attributes::{ContextAttributes, PowerPreference};
pub use context::RenderingContext;
pub use defaults::Defaults;
pub use error::{BootstrapError, CallError};
pub use extension::{Extension, ExtensionMember, Method};
pub use host::{HostContext, Surface};
pub use kind::{ContextKind, CONTEXT_KINDS, WEBGL1_CONTEXT_KINDS};
pub use normalize::{
    add_extension_to_context, add_extensions, add_extensions_to_context, ConstantConflict,
    ExistingMember, SUPPORTED_EXTENSIONS,
};
pub use report::{ContextReport, InstalledMember};
pub use value::{CallResult, Function, GlEnum, GlValue, Member};
