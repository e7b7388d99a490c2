//! The bootstrapped rendering context.
//!
//! A [`RenderingContext`] pairs the host's native context with the names the
//! normalizer installs on top of it. The namespace only grows: installs never
//! replace an existing name, and nothing is ever removed.

use crate::error::CallError;
use crate::extension::Extension;
use crate::host::HostContext;
use crate::kind::ContextKind;
use crate::normalize::ConstantConflict;
use crate::value::{CallResult, Function, GlEnum, GlValue, Member};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

/// A live rendering context with a growable member namespace.
pub struct RenderingContext {
    kind: ContextKind,
    host: Box<dyn HostContext>,
    installed: BTreeMap<String, Member>,
    extensions: BTreeMap<String, Rc<Extension>>,
    conflicts: Vec<ConstantConflict>,
}

impl RenderingContext {
    /// Wraps a native host context acquired as `kind`.
    pub fn new(kind: ContextKind, host: Box<dyn HostContext>) -> Self {
        Self {
            kind,
            host,
            installed: BTreeMap::new(),
            extensions: BTreeMap::new(),
            conflicts: Vec::new(),
        }
    }

    /// The kind this context was acquired as.
    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    pub fn is_webgl2(&self) -> bool {
        self.kind.is_webgl2()
    }

    pub fn is_webgl1(&self) -> bool {
        self.kind.is_webgl1()
    }

    /// The native host context.
    pub fn host(&self) -> &dyn HostContext {
        self.host.as_ref()
    }

    /// Requests an extension, returning the same object on repeated calls.
    ///
    /// The context keeps every granted extension alive for its own lifetime,
    /// which is what installed trampolines rely on.
    pub fn get_extension(&mut self, name: &str) -> Option<Rc<Extension>> {
        if let Some(ext) = self.extensions.get(name) {
            return Some(Rc::clone(ext));
        }
        let ext = Rc::new(self.host.get_extension(name)?);
        self.extensions.insert(name.to_string(), Rc::clone(&ext));
        Some(ext)
    }

    /// Identifiers of every extension granted so far, in name order.
    pub fn enabled_extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// Looks up a member by name, native or installed.
    pub fn member(&self, name: &str) -> Option<Member> {
        self.installed
            .get(name)
            .cloned()
            .or_else(|| self.host.native_member(name))
    }

    /// True if `name` resolves to any member.
    pub fn contains(&self, name: &str) -> bool {
        self.installed.contains_key(name) || self.host.native_member(name).is_some()
    }

    /// Looks up a constant by name.
    pub fn constant(&self, name: &str) -> Option<GlEnum> {
        self.member(name).and_then(|m| m.as_constant())
    }

    /// Looks up a function by name.
    pub fn function(&self, name: &str) -> Option<Function> {
        match self.member(name)? {
            Member::Function(f) => Some(f),
            Member::Constant(_) => None,
        }
    }

    /// Calls a function member by name.
    ///
    /// # Errors
    ///
    /// Returns `CallError::UnknownFunction` if `name` is missing or is a
    /// constant; otherwise whatever the function itself returns.
    pub fn call(&self, name: &str, args: &[GlValue]) -> CallResult {
        self.function(name)
            .ok_or_else(|| CallError::UnknownFunction(name.to_string()))?
            .call(args)
    }

    /// Every name on the context: native names plus installed names.
    pub fn member_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = self.host.native_member_names().into_iter().collect();
        names.extend(self.installed.keys().cloned());
        names
    }

    /// Names added by normalization, in name order.
    pub fn installed_names(&self) -> impl Iterator<Item = &str> {
        self.installed.keys().map(String::as_str)
    }

    /// Installed members, in name order.
    pub fn installed(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.installed.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Constant collisions recorded during normalization.
    pub fn conflicts(&self) -> &[ConstantConflict] {
        &self.conflicts
    }

    /// Installs `member` under `name` unless the name already resolves.
    ///
    /// Returns whether the member was installed.
    pub(crate) fn install(&mut self, name: &str, member: Member) -> bool {
        if self.contains(name) {
            return false;
        }
        self.installed.insert(name.to_string(), member);
        true
    }

    pub(crate) fn record_conflict(&mut self, conflict: ConstantConflict) {
        self.conflicts.push(conflict);
    }
}

impl fmt::Debug for RenderingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderingContext")
            .field("kind", &self.kind)
            .field("installed", &self.installed.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions.keys().collect::<Vec<_>>())
            .field("conflicts", &self.conflicts.len())
            .finish()
    }
}
