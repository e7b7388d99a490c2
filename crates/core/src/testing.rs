//! In-memory host doubles shared by the unit tests.

use crate::attributes::ContextAttributes;
use crate::extension::Extension;
use crate::host::{HostContext, Surface};
use crate::kind::ContextKind;
use crate::value::{Function, GlEnum, GlValue, Member};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A host context backed by maps of native members and extension factories.
#[derive(Clone, Default)]
pub struct MapHost {
    natives: BTreeMap<String, Member>,
    extensions: BTreeMap<String, Rc<dyn Fn() -> Extension>>,
    extension_queries: Rc<Cell<usize>>,
}

impl MapHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constant(mut self, name: &str, value: GlEnum) -> Self {
        self.natives.insert(name.to_string(), Member::Constant(value));
        self
    }

    pub fn with_function(mut self, name: &str) -> Self {
        self.natives.insert(
            name.to_string(),
            Member::Function(Function::new(|_| Ok(GlValue::Null))),
        );
        self
    }

    pub fn with_extension<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn() -> Extension + 'static,
    {
        self.extensions.insert(name.to_string(), Rc::new(factory));
        self
    }

    /// The native function registered under `name`.
    pub fn native_function(&self, name: &str) -> Function {
        match self.natives.get(name) {
            Some(Member::Function(f)) => f.clone(),
            _ => panic!("no native function {name}"),
        }
    }

    /// Shared counter of `get_extension` calls across clones.
    pub fn extension_queries(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.extension_queries)
    }
}

impl HostContext for MapHost {
    fn native_member(&self, name: &str) -> Option<Member> {
        self.natives.get(name).cloned()
    }

    fn native_member_names(&self) -> Vec<String> {
        self.natives.keys().cloned().collect()
    }

    fn get_extension(&self, name: &str) -> Option<Extension> {
        self.extension_queries.set(self.extension_queries.get() + 1);
        self.extensions.get(name).map(|factory| factory())
    }
}

/// A surface that grants a fixed set of kinds and records every request.
#[derive(Default)]
pub struct ScriptedSurface {
    grants: BTreeMap<ContextKind, MapHost>,
    pub queries: Vec<ContextKind>,
    pub attributes: Vec<Option<ContextAttributes>>,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn granting(mut self, kind: ContextKind, host: MapHost) -> Self {
        self.grants.insert(kind, host);
        self
    }
}

impl Surface for ScriptedSurface {
    fn get_context(
        &mut self,
        kind: ContextKind,
        attributes: Option<&ContextAttributes>,
    ) -> Option<Box<dyn HostContext>> {
        self.queries.push(kind);
        self.attributes.push(attributes.cloned());
        self.grants
            .get(&kind)
            .cloned()
            .map(|host| Box::new(host) as Box<dyn HostContext>)
    }
}
