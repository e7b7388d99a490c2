//! Host-side seams: the drawable surface and the native context it yields.
//!
//! These traits are implemented by host bindings (a browser canvas, a
//! simulated host for tests and tooling). Both queries follow the host's
//! capability idiom: `None` means "not available", never an error.

use crate::attributes::ContextAttributes;
use crate::extension::Extension;
use crate::kind::ContextKind;
use crate::value::Member;

/// A drawable from which rendering contexts are requested.
pub trait Surface {
    /// Requests a context of `kind`, passing `attributes` through unchanged.
    ///
    /// Returns `None` if this kind is unsupported or the surface is already
    /// bound to a different kind.
    fn get_context(
        &mut self,
        kind: ContextKind,
        attributes: Option<&ContextAttributes>,
    ) -> Option<Box<dyn HostContext>>;
}

/// The native side of a rendering context.
pub trait HostContext {
    /// Looks up a member the host context exposes natively.
    fn native_member(&self, name: &str) -> Option<Member>;

    /// Names of every native member.
    fn native_member_names(&self) -> Vec<String>;

    /// Requests an extension by identifier (`getExtension`).
    fn get_extension(&self, name: &str) -> Option<Extension>;
}
