//! A simulated host driven by a [`HostProfile`].
//!
//! [`SimSurface`] behaves like a canvas: it grants the kinds its profile lists,
//! stays bound to the first kind it grants, and records every request. Every
//! simulated function appends a [`CallRecord`] to a log shared by the surface
//! and returns `Null`.

use crate::profile::{ContextProfile, ExtensionSpec, HostProfile, MemberSpec};
use glboot_core::{
    ContextAttributes, ContextKind, Extension, ExtensionMember, Function, GlValue, HostContext,
    Member, Method, Surface,
};
use std::cell::RefCell;
use std::rc::Rc;

/// One call made through a simulated function.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    /// `"context"` for native functions, otherwise the extension identifier.
    pub target: String,
    /// Member name as the host exposes it.
    pub member: String,
    pub args: Vec<GlValue>,
}

/// Call log shared between a surface, its contexts and their extensions.
pub type CallLog = Rc<RefCell<Vec<CallRecord>>>;

/// Target name recorded for native context functions.
pub const CONTEXT_TARGET: &str = "context";

/// Simulated native context for one kind.
pub struct SimContext {
    profile: ContextProfile,
    calls: CallLog,
}

impl SimContext {
    pub fn new(profile: ContextProfile, calls: CallLog) -> Self {
        Self { profile, calls }
    }

    fn native_function(&self, name: &str) -> Function {
        let calls = Rc::clone(&self.calls);
        let member = name.to_string();
        Function::new(move |args| {
            calls.borrow_mut().push(CallRecord {
                target: CONTEXT_TARGET.to_string(),
                member: member.clone(),
                args: args.to_vec(),
            });
            Ok(GlValue::Null)
        })
    }
}

/// Builds an extension whose methods log through the receiver's state.
fn build_extension(name: &str, spec: &ExtensionSpec, calls: &CallLog) -> Extension {
    spec.iter().fold(
        Extension::new(name).with_state(Rc::clone(calls)),
        |ext, (key, member)| match member {
            MemberSpec::Constant(value) => ext.with_constant(key, *value),
            MemberSpec::Function(_) => {
                let member_name = key.clone();
                ext.with_member(
                    key,
                    ExtensionMember::Method(Method::new(move |receiver, args| {
                        if let Some(calls) = receiver.state::<CallLog>() {
                            calls.borrow_mut().push(CallRecord {
                                target: receiver.name().to_string(),
                                member: member_name.clone(),
                                args: args.to_vec(),
                            });
                        }
                        Ok(GlValue::Null)
                    })),
                )
            }
        },
    )
}

impl HostContext for SimContext {
    fn native_member(&self, name: &str) -> Option<Member> {
        match self.profile.native.get(name)? {
            MemberSpec::Constant(value) => Some(Member::Constant(*value)),
            MemberSpec::Function(_) => Some(Member::Function(self.native_function(name))),
        }
    }

    fn native_member_names(&self) -> Vec<String> {
        self.profile.native.keys().cloned().collect()
    }

    fn get_extension(&self, name: &str) -> Option<Extension> {
        let spec = self.profile.extensions.get(name)?;
        Some(build_extension(name, spec, &self.calls))
    }
}

/// A simulated drawable.
pub struct SimSurface {
    profile: HostProfile,
    bound: Option<ContextKind>,
    queries: Vec<ContextKind>,
    calls: CallLog,
}

impl SimSurface {
    pub fn new(profile: HostProfile) -> Self {
        Self {
            profile,
            bound: None,
            queries: Vec::new(),
            calls: CallLog::default(),
        }
    }

    /// Every kind requested so far, in request order.
    pub fn queries(&self) -> &[ContextKind] {
        &self.queries
    }

    /// The kind this surface is bound to, if any.
    pub fn bound_kind(&self) -> Option<ContextKind> {
        self.bound
    }

    /// Snapshot of every simulated call made so far.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.borrow().clone()
    }
}

impl Surface for SimSurface {
    fn get_context(
        &mut self,
        kind: ContextKind,
        attributes: Option<&ContextAttributes>,
    ) -> Option<Box<dyn HostContext>> {
        self.queries.push(kind);

        if let Some(bound) = self.bound {
            if bound != kind {
                log::debug!("surface already bound to {bound}, refusing {kind}");
                return None;
            }
        }

        let fail_on_caveat =
            attributes.and_then(|a| a.fail_if_major_performance_caveat) == Some(true);
        if fail_on_caveat && self.profile.major_performance_caveat {
            log::debug!("refusing {kind}: major performance caveat");
            return None;
        }

        let profile = self.profile.contexts.get(&kind)?.clone();
        self.bound = Some(kind);
        Some(Box::new(SimContext::new(profile, Rc::clone(&self.calls))))
    }
}
