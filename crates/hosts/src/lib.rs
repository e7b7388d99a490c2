#![deny(unsafe_code)]
//! Simulated hosts for the glboot bootstrap layer.
//!
//! This crate sits between `glboot-core` (which defines the `Surface` and
//! `HostContext` seams) and the front ends. Both the CLI and the tests use it
//! to exercise acquisition and normalization without a browser.

pub mod error;
pub mod profile;
pub mod sim;

pub use error::ProfileError;
pub use profile::{ContextProfile, HostProfile, MemberSpec};
pub use sim::{CallRecord, SimContext, SimSurface};

/// Built-in profiles, by name.
const PRESETS: &[(&str, &str)] = &[
    (
        "webgl2-desktop",
        include_str!("../presets/webgl2-desktop.json"),
    ),
    ("webgl1-mobile", include_str!("../presets/webgl1-mobile.json")),
    (
        "legacy-experimental",
        include_str!("../presets/legacy-experimental.json"),
    ),
    ("headless", include_str!("../presets/headless.json")),
];

/// Lookup for the built-in host profiles.
pub struct Preset;

impl Preset {
    /// Loads a built-in profile by name.
    ///
    /// Returns `ProfileError::UnknownPreset` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<HostProfile, ProfileError> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .ok_or_else(|| ProfileError::UnknownPreset(name.to_string()))
            .and_then(|(_, json)| HostProfile::from_json(json))
    }

    /// Names of every built-in profile.
    pub fn list_names() -> Vec<&'static str> {
        PRESETS.iter().map(|(name, _)| *name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glboot_core::{ContextAcquirer, ContextKind, SUPPORTED_EXTENSIONS};

    #[test]
    fn every_preset_parses() {
        for name in Preset::list_names() {
            let profile = Preset::from_name(name);
            assert!(profile.is_ok(), "preset {name} failed: {:?}", profile.err());
        }
    }

    #[test]
    fn unknown_preset_returns_error() {
        let result = Preset::from_name("nonexistent");
        assert!(matches!(result, Err(ProfileError::UnknownPreset(_))));
    }

    #[test]
    fn list_names_includes_headless() {
        assert!(Preset::list_names().contains(&"headless"));
    }

    #[test]
    fn headless_preset_yields_no_context() {
        let mut surface = SimSurface::new(Preset::from_name("headless").unwrap());
        assert!(ContextAcquirer::default()
            .get_context(&mut surface, None)
            .is_none());
    }

    #[test]
    fn desktop_preset_prefers_webgl2_without_conflicts() {
        let mut surface = SimSurface::new(Preset::from_name("webgl2-desktop").unwrap());
        let ctx = ContextAcquirer::default()
            .get_context(&mut surface, None)
            .unwrap();
        assert!(ctx.is_webgl2());
        assert_eq!(surface.queries(), &[ContextKind::WebGl2]);
        assert_eq!(ctx.constant("TEXTURE_MAX_ANISOTROPY"), Some(34046));
        assert_eq!(ctx.constant("COMPRESSED_RGB_S3TC_DXT1_EXT"), Some(33776));
        assert!(ctx.conflicts().is_empty());
    }

    #[test]
    fn desktop_preset_webgl1_gains_webgl2_names() {
        let mut surface = SimSurface::new(Preset::from_name("webgl2-desktop").unwrap());
        let ctx = ContextAcquirer::default()
            .get_webgl_context(&mut surface, None)
            .unwrap();
        for name in [
            "drawArraysInstanced",
            "vertexAttribDivisor",
            "createVertexArray",
            "bindVertexArray",
            "drawBuffers",
        ] {
            assert!(ctx.function(name).is_some(), "missing {name}");
        }
        assert_eq!(ctx.constant("VERTEX_ATTRIB_ARRAY_DIVISOR"), Some(35070));
        assert_eq!(ctx.constant("MIN"), Some(32775));
        assert_eq!(ctx.constant("UNSIGNED_INT_24_8"), Some(34042));
        // Same value as the native constant: no diagnostic.
        assert_eq!(ctx.constant("COLOR_ATTACHMENT0"), Some(36064));
        assert!(ctx.conflicts().is_empty());
    }

    #[test]
    fn legacy_preset_falls_back_to_experimental() {
        let mut surface = SimSurface::new(Preset::from_name("legacy-experimental").unwrap());
        let ctx = ContextAcquirer::default()
            .get_context(&mut surface, None)
            .unwrap();
        assert_eq!(ctx.kind(), ContextKind::ExperimentalWebGl);
        assert_eq!(ctx.constant("COMPRESSED_RGB_ETC1"), Some(36196));
        assert_eq!(
            ctx.enabled_extensions().collect::<Vec<_>>(),
            vec![
                "OES_standard_derivatives",
                "OES_texture_float",
                "WEBGL_compressed_texture_etc1"
            ]
        );
    }

    #[test]
    fn preset_extensions_outside_supported_list_are_not_enabled() {
        let mut surface = SimSurface::new(Preset::from_name("webgl2-desktop").unwrap());
        let ctx = ContextAcquirer::default()
            .get_context(&mut surface, None)
            .unwrap();
        assert!(!SUPPORTED_EXTENSIONS.contains(&"EXT_color_buffer_float"));
        assert!(!ctx.enabled_extensions().any(|e| e == "EXT_color_buffer_float"));
    }
}
