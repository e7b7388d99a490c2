//! Host number conversion.

use glboot_core::{GlEnum, GlValue};

/// Largest integer a host double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Splits a host number into an integer or a float value.
///
/// Whole numbers inside the exactly-representable range become integers.
pub fn classify_number(n: f64) -> GlValue {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        GlValue::Int(n as i64)
    } else {
        GlValue::Float(n)
    }
}

/// A host number as a constant, or `None` if it is not a `GlEnum`.
pub fn enum_from_number(n: f64) -> Option<GlEnum> {
    classify_number(n).as_enum()
}
