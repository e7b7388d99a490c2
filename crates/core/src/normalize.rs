//! Extension normalization.
//!
//! A granted extension exposes its members under vendor-suffixed names:
//! functions carry the bare vendor (`drawArraysInstancedANGLE`), constants
//! carry an underscore plus the vendor (`VERTEX_ATTRIB_ARRAY_DIVISOR_ANGLE`).
//! Normalization strips that suffix and installs each member on the context
//! under the resulting canonical name, so code written against WebGL2 names
//! also runs on a WebGL1 context with the right extensions.
//!
//! Existing names always win. A function that is already present is left
//! alone silently; a constant that is already present with a different value
//! is reported as a [`ConstantConflict`] and left alone.

use crate::context::RenderingContext;
use crate::extension::{Extension, ExtensionMember};
use crate::value::{GlEnum, Member};
use serde::Serialize;
use std::rc::Rc;

/// Extensions normalized onto every new context, in the order they are tried.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "ANGLE_instanced_arrays",
    "EXT_blend_minmax",
    "EXT_color_buffer_half_float",
    "EXT_disjoint_timer_query",
    "EXT_frag_depth",
    "EXT_sRGB",
    "EXT_shader_texture_lod",
    "EXT_texture_filter_anisotropic",
    "OES_element_index_uint",
    "OES_standard_derivatives",
    "OES_texture_float",
    "OES_texture_float_linear",
    "OES_texture_half_float",
    "OES_texture_half_float_linear",
    "OES_vertex_array_object",
    "WEBGL_color_buffer_float",
    "WEBGL_compressed_texture_atc",
    "WEBGL_compressed_texture_etc1",
    "WEBGL_compressed_texture_pvrtc",
    "WEBGL_compressed_texture_s3tc",
    "WEBGL_depth_texture",
    "WEBGL_draw_buffers",
];

/// What a colliding name already held on the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum ExistingMember {
    Constant(GlEnum),
    Function,
}

/// An extension constant whose canonical name was already taken by a
/// different value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantConflict {
    /// Extension identifier.
    pub extension: String,
    /// Member name as the extension exposes it.
    pub key: String,
    /// Canonical name that collided.
    pub name: String,
    /// Value kept on the context.
    pub existing: ExistingMember,
    /// Value the extension reported.
    pub incoming: GlEnum,
}

/// The vendor token of an identifier: the text before the first underscore.
///
/// `"ANGLE_instanced_arrays"` yields `Some("ANGLE")`; an identifier with no
/// underscore has no vendor.
pub fn vendor_prefix(identifier: &str) -> Option<&str> {
    identifier.split_once('_').map(|(vendor, _)| vendor)
}

/// Canonical name of an extension member.
///
/// Functions lose a trailing `<vendor>`, constants a trailing `_<vendor>`.
/// Keys that do not end in the expected suffix (the S3TC and PVRTC formats,
/// for example) are returned unchanged.
pub fn canonical_member_name<'k>(identifier: &str, key: &'k str, is_function: bool) -> &'k str {
    let Some(vendor) = vendor_prefix(identifier) else {
        return key;
    };
    let stripped = if is_function {
        key.strip_suffix(vendor)
    } else {
        key.strip_suffix(vendor).and_then(|k| k.strip_suffix('_'))
    };
    stripped.unwrap_or(key)
}

/// Requests `identifier` and installs its members under canonical names.
///
/// Returns the extension if the host granted it, `None` otherwise. A denied
/// extension leaves the context untouched.
pub fn add_extension_to_context(
    gl: &mut RenderingContext,
    identifier: &str,
) -> Option<Rc<Extension>> {
    let Some(ext) = gl.get_extension(identifier) else {
        log::debug!("extension {identifier} not supported");
        return None;
    };

    if vendor_prefix(identifier).is_none() {
        log::warn!("extension {identifier} has no vendor prefix; member names are kept as-is");
    }

    for (key, member) in ext.members() {
        // A key that is exactly the suffix maps to the empty name and is
        // installed like any other.
        let name = canonical_member_name(identifier, key, member.is_method());

        match gl.member(name) {
            Some(existing) => {
                if let ExtensionMember::Constant(value) = member {
                    if existing.as_constant() != Some(*value) {
                        let existing = match existing {
                            Member::Constant(v) => ExistingMember::Constant(v),
                            Member::Function(_) => ExistingMember::Function,
                        };
                        log::warn!(
                            "extension {identifier}: {name} is already {existing:?}, \
                             ignoring {key} = {value:#x}"
                        );
                        gl.record_conflict(ConstantConflict {
                            extension: identifier.to_string(),
                            key: key.to_string(),
                            name: name.to_string(),
                            existing,
                            incoming: *value,
                        });
                    }
                }
            }
            None => {
                let installed = match member {
                    ExtensionMember::Method(method) => Member::Function(method.bind(name, &ext)),
                    ExtensionMember::Constant(value) => Member::Constant(*value),
                };
                gl.install(name, installed);
                log::trace!("extension {identifier}: installed {key} as {name}");
            }
        }
    }

    log::debug!("extension {identifier} enabled ({} members)", ext.len());
    Some(ext)
}

/// Normalizes every identifier in order, returning the granted extensions.
///
/// A denied identifier never prevents the ones after it.
pub fn add_extensions(gl: &mut RenderingContext, identifiers: &[&str]) -> Vec<Rc<Extension>> {
    identifiers
        .iter()
        .filter_map(|identifier| add_extension_to_context(gl, identifier))
        .collect()
}

/// Normalizes every identifier in [`SUPPORTED_EXTENSIONS`].
pub fn add_extensions_to_context(gl: &mut RenderingContext) -> Vec<Rc<Extension>> {
    add_extensions(gl, SUPPORTED_EXTENSIONS)
}
