//! Values that live in a rendering context's namespace.
//!
//! Every name on a context resolves to a [`Member`]: either a callable
//! [`Function`] or a numeric [`GlEnum`] constant. Host bindings produce this
//! tagged form at the boundary so the normalizer never has to inspect a value
//! to decide whether it can be called.

use crate::error::CallError;
use std::fmt;
use std::rc::Rc;

/// A GL enumerant (`GLenum`), the type of every named constant.
pub type GlEnum = u32;

/// A dynamically typed argument or return value of a context function.
#[derive(Debug, Clone, PartialEq)]
pub enum GlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Opaque host object (vertex array, query, texture...) referenced by id.
    Handle(u32),
    Text(String),
}

impl GlValue {
    /// Returns the value as a `GlEnum` if it is a non-negative integer that fits.
    pub fn as_enum(&self) -> Option<GlEnum> {
        match self {
            GlValue::Int(v) => GlEnum::try_from(*v).ok(),
            _ => None,
        }
    }
}

/// Result type of every context function.
pub type CallResult = Result<GlValue, CallError>;

/// A callable member of a rendering context.
///
/// Cheap to clone; clones share the same underlying closure.
#[derive(Clone)]
pub struct Function {
    inner: Rc<dyn Fn(&[GlValue]) -> CallResult>,
}

impl Function {
    /// Wraps a closure as a context function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[GlValue]) -> CallResult + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Invokes the function with the given arguments.
    pub fn call(&self, args: &[GlValue]) -> CallResult {
        (self.inner)(args)
    }

    /// Returns true if both values share the same closure.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// A named value on a rendering context.
#[derive(Debug, Clone)]
pub enum Member {
    Function(Function),
    Constant(GlEnum),
}

impl Member {
    /// Returns true for function members.
    pub fn is_function(&self) -> bool {
        matches!(self, Member::Function(_))
    }

    /// Returns the constant value, or `None` for functions.
    pub fn as_constant(&self) -> Option<GlEnum> {
        match self {
            Member::Constant(v) => Some(*v),
            Member::Function(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_enum_accepts_only_non_negative_ints() {
        assert_eq!(GlValue::Int(0x88FE).as_enum(), Some(0x88FE));
        assert_eq!(GlValue::Int(-1).as_enum(), None);
        assert_eq!(GlValue::Float(3.0).as_enum(), None);
        assert_eq!(GlValue::Null.as_enum(), None);
        assert_eq!(GlValue::Int(1 << 40).as_enum(), None);
    }

    #[test]
    fn function_call_forwards_arguments() {
        let f = Function::new(|args| Ok(GlValue::Int(args.len() as i64)));
        let got = f.call(&[GlValue::Null, GlValue::Bool(true)]).unwrap();
        assert_eq!(got, GlValue::Int(2));
    }

    #[test]
    fn function_clones_share_closure() {
        let f = Function::new(|_| Ok(GlValue::Null));
        let g = f.clone();
        let h = Function::new(|_| Ok(GlValue::Null));
        assert!(f.ptr_eq(&g));
        assert!(!f.ptr_eq(&h));
    }

    #[test]
    fn member_accessors() {
        let c = Member::Constant(5);
        assert!(!c.is_function());
        assert_eq!(c.as_constant(), Some(5));

        let f = Member::Function(Function::new(|_| Ok(GlValue::Null)));
        assert!(f.is_function());
        assert_eq!(f.as_constant(), None);
    }
}
