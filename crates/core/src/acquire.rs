//! Context acquisition with ordered fallback.
//!
//! A [`ContextAcquirer`] owns the [`Defaults`] that shape every acquisition.
//! Each call walks a fixed kind list from newest to oldest and keeps the
//! first context the surface grants. Nothing is cached between calls.

use crate::attributes::ContextAttributes;
use crate::context::RenderingContext;
use crate::defaults::Defaults;
use crate::error::BootstrapError;
use crate::host::Surface;
use crate::kind::{ContextKind, CONTEXT_KINDS, WEBGL1_CONTEXT_KINDS};
use crate::normalize::add_extensions_to_context;
use serde_json::Value;

/// Acquires rendering contexts from surfaces.
#[derive(Debug, Clone, Default)]
pub struct ContextAcquirer {
    defaults: Defaults,
}

impl ContextAcquirer {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Current defaults.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Merges recognized keys from `partial` into the defaults.
    ///
    /// # Errors
    ///
    /// See [`Defaults::apply`].
    pub fn set_defaults(&mut self, partial: &Value) -> Result<(), BootstrapError> {
        self.defaults.apply(partial)
    }

    /// Acquires a context, preferring WebGL2.
    ///
    /// Returns `None` if the surface supports none of [`CONTEXT_KINDS`].
    pub fn get_context(
        &self,
        surface: &mut dyn Surface,
        attributes: Option<&ContextAttributes>,
    ) -> Option<RenderingContext> {
        self.acquire(surface, CONTEXT_KINDS, attributes)
    }

    /// Acquires a WebGL1 context, never WebGL2.
    pub fn get_webgl_context(
        &self,
        surface: &mut dyn Surface,
        attributes: Option<&ContextAttributes>,
    ) -> Option<RenderingContext> {
        self.acquire(surface, WEBGL1_CONTEXT_KINDS, attributes)
    }

    /// Tries each kind in order and returns the first granted context.
    ///
    /// When `add_extensions_to_context` is set, the context is normalized
    /// against every supported extension before it is returned.
    pub fn acquire(
        &self,
        surface: &mut dyn Surface,
        kinds: &[ContextKind],
        attributes: Option<&ContextAttributes>,
    ) -> Option<RenderingContext> {
        let (kind, host) = kinds.iter().find_map(|&kind| {
            let host = surface.get_context(kind, attributes);
            log::debug!(
                "context kind {kind}: {}",
                if host.is_some() { "granted" } else { "unavailable" }
            );
            host.map(|host| (kind, host))
        })?;

        let mut context = RenderingContext::new(kind, host);
        if self.defaults.add_extensions_to_context {
            let granted = add_extensions_to_context(&mut context);
            log::info!(
                "acquired {kind} context with {} extension(s) normalized",
                granted.len()
            );
        } else {
            log::info!("acquired {kind} context");
        }
        Some(context)
    }
}
