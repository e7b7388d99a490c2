//! Extension objects granted by a host context.
//!
//! An [`Extension`] is what a host hands back for a granted identifier such as
//! `ANGLE_instanced_arrays`: a set of vendor-suffixed members plus whatever
//! internal state its methods need. Methods are unbound; they receive the
//! extension as an explicit receiver when called.

use crate::error::CallError;
use crate::value::{CallResult, Function, GlEnum, GlValue};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// An unbound extension method. The first argument is the receiver.
#[derive(Clone)]
pub struct Method {
    inner: Rc<dyn Fn(&Extension, &[GlValue]) -> CallResult>,
}

impl Method {
    /// Wraps a closure as an extension method.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Extension, &[GlValue]) -> CallResult + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Calls the method with an explicit receiver.
    pub fn call(&self, receiver: &Extension, args: &[GlValue]) -> CallResult {
        (self.inner)(receiver, args)
    }

    /// Binds the method to `receiver`, producing a context [`Function`].
    ///
    /// The returned function holds only a weak reference to the extension;
    /// calling it after the extension is dropped yields
    /// `CallError::ReceiverReleased`.
    pub fn bind(&self, name: &str, receiver: &Rc<Extension>) -> Function {
        let method = self.clone();
        let receiver = Rc::downgrade(receiver);
        let name = name.to_string();
        Function::new(move |args| match receiver.upgrade() {
            Some(ext) => method.call(&ext, args),
            None => Err(CallError::ReceiverReleased(name.clone())),
        })
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

/// A member of an extension object, before normalization.
#[derive(Debug, Clone)]
pub enum ExtensionMember {
    Method(Method),
    Constant(GlEnum),
}

impl ExtensionMember {
    pub fn is_method(&self) -> bool {
        matches!(self, ExtensionMember::Method(_))
    }
}

/// A granted extension: identifier, members keyed by name, and host state.
pub struct Extension {
    name: String,
    members: BTreeMap<String, ExtensionMember>,
    state: Box<dyn Any>,
}

impl Extension {
    /// Creates an extension with no members and no state.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: BTreeMap::new(),
            state: Box::new(()),
        }
    }

    /// Adds a method member.
    pub fn with_method<F>(mut self, key: &str, f: F) -> Self
    where
        F: Fn(&Extension, &[GlValue]) -> CallResult + 'static,
    {
        self.members
            .insert(key.to_string(), ExtensionMember::Method(Method::new(f)));
        self
    }

    /// Adds a constant member.
    pub fn with_constant(mut self, key: &str, value: GlEnum) -> Self {
        self.members
            .insert(key.to_string(), ExtensionMember::Constant(value));
        self
    }

    /// Adds an already-built member.
    pub fn with_member(mut self, key: &str, member: ExtensionMember) -> Self {
        self.members.insert(key.to_string(), member);
        self
    }

    /// Replaces the host state carried by this extension.
    pub fn with_state<T: Any>(mut self, state: T) -> Self {
        self.state = Box::new(state);
        self
    }

    /// The identifier this extension was granted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in name order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &ExtensionMember)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a single member by its original (suffixed) name.
    pub fn member(&self, key: &str) -> Option<&ExtensionMember> {
        self.members.get(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Downcasts the host state.
    pub fn state<T: Any>(&self) -> Option<&T> {
        self.state.downcast_ref::<T>()
    }

    /// Calls a method member directly on this extension.
    ///
    /// # Errors
    ///
    /// Returns `CallError::UnknownFunction` if `key` is missing or is a constant.
    pub fn call(&self, key: &str, args: &[GlValue]) -> CallResult {
        match self.members.get(key) {
            Some(ExtensionMember::Method(m)) => m.call(self, args),
            _ => Err(CallError::UnknownFunction(key.to_string())),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name)
            .field("members", &self.members.keys().collect::<Vec<_>>())
            .finish()
    }
}
