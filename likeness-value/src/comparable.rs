// likeness-value - Custom comparison capability
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Custom comparison capability.
//!
//! A class may supply its own equality semantics by attaching an
//! [`EqualityComparable`] implementation to its [`ClassDef`]. When either
//! operand of a comparison carries the capability, it takes absolute
//! precedence over the engine's structural rules.
//!
//! [`ClassDef`]: crate::class::ClassDef

use crate::value::Value;

/// Handle into an in-progress comparison.
///
/// Passed to [`EqualityComparable::is_equal_to`] so a custom implementation
/// can recurse through the engine for sub-comparisons. Recursion through the
/// handle shares the cycle guard of the enclosing top-level call, so object
/// graphs reached from inside a hook are still cycle-safe.
pub trait Comparison {
    /// Compare two values within the current comparison.
    fn equals(&mut self, left: &Value, right: &Value) -> bool;
}

/// Custom equality for a class.
///
/// `this` is the operand whose class carries the capability; `other` is the
/// opposite operand, which may be of any kind. The engine returns the verdict
/// as-is: it neither re-checks it structurally nor enforces symmetry, so an
/// asymmetric implementation produces asymmetric overall results.
pub trait EqualityComparable {
    /// Return true if `other` is equal to `this`.
    fn is_equal_to(&self, this: &Value, other: &Value, comparison: &mut dyn Comparison) -> bool;
}
