// likeness-core - The recursive equality engine
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! The recursive equality engine.
//!
//! `Comparator::equals` walks two values in lock-step and returns a single
//! boolean verdict. Per recursive step:
//!
//! 1. If either operand is an object whose class carries a custom comparison
//!    capability, that capability decides the verdict outright.
//! 2. Otherwise dispatch on the left operand's kind: primitives compare by
//!    strict value-and-type identity, containers by key sequence then
//!    recursive values, objects by exact class identity then their
//!    qualified-field mappings.
//! 3. Two objects that pass the class check consult the cycle guard before
//!    their fields are inspected.
//!
//! Comparison never fails and never mutates its inputs. The only systemic
//! limit is call-stack depth on pathologically deep *non-cyclic* nesting,
//! which is accepted rather than detected: callers are expected to bound the
//! depth of the structures they compare.

use likeness_value::{Comparison, Container, ObjectInstance, Value};
use std::rc::Rc;

use crate::context::{ComparisonContext, PairKey};

/// Deeply compares values.
///
/// Stateless and cheap to create; each `equals` call owns a private, fresh
/// cycle guard, so one comparator may serve any number of calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator;

impl Comparator {
    /// Create a new comparator.
    pub fn new() -> Self {
        Comparator
    }

    /// Compare two values for deep structural equality.
    ///
    /// Symmetric for all structural cases; a custom comparison capability on
    /// either operand takes precedence and may break symmetry if it is
    /// implemented asymmetrically.
    pub fn equals(&self, left: &Value, right: &Value) -> bool {
        let mut context = ComparisonContext::new();
        Guarded {
            context: &mut context,
        }
        .value_equals(left, right)
    }
}

/// One in-flight top-level comparison: the recursion plus its cycle guard.
struct Guarded<'a> {
    context: &'a mut ComparisonContext,
}

impl Comparison for Guarded<'_> {
    fn equals(&mut self, left: &Value, right: &Value) -> bool {
        self.value_equals(left, right)
    }
}

impl Guarded<'_> {
    fn value_equals(&mut self, left: &Value, right: &Value) -> bool {
        // Custom capability wins over every structural rule, left first.
        if let Value::Object(object) = left {
            if let Some(hook) = object.class().hook() {
                return hook.is_equal_to(left, right, self);
            }
        }
        if let Value::Object(object) = right {
            if let Some(hook) = object.class().hook() {
                return hook.is_equal_to(right, left, self);
            }
        }

        match left {
            Value::Container(container) => self.container_equals(container, right),
            Value::Object(object) => self.object_equals(object, right),
            _ => primitive_equals(left, right),
        }
    }

    /// Compare a container to another arbitrary value.
    ///
    /// Equal only if `right` is also a container with the identical key
    /// sequence (same keys, same order); values then compare recursively by
    /// key position. Short-circuits on the first mismatch.
    fn container_equals(&mut self, left: &Container, right: &Value) -> bool {
        let Value::Container(right) = right else {
            return false;
        };
        if left.len() != right.len() {
            return false;
        }
        if !left.keys().eq(right.keys()) {
            return false;
        }
        for (left_value, right_value) in left.values().zip(right.values()) {
            if !self.value_equals(left_value, right_value) {
                return false;
            }
        }
        true
    }

    /// Compare an object to another arbitrary value.
    ///
    /// Equal only if `right` is also an object of the identical declared
    /// class and the two qualified-field mappings compare equal under the
    /// container rule. A pair already in the cycle guard is assumed equal
    /// without inspecting fields; a new pair is entered *before* recursing,
    /// so reference cycles terminate.
    fn object_equals(&mut self, left: &Rc<ObjectInstance>, right: &Value) -> bool {
        let Value::Object(right) = right else {
            return false;
        };
        if !left.class().same_class(right.class()) {
            return false;
        }

        let key = PairKey::new(left, right);
        if !self.context.enter(key) {
            return true;
        }

        let right_properties = Value::Container(right.properties());
        self.container_equals(&left.properties(), &right_properties)
    }
}

/// Strict value-and-type identity for primitive kinds.
///
/// No coercion of any sort: `Int` never equals `Float`, `"0"` never equals
/// `0`, nil equals only nil. Floats compare bitwise, so NaN is self-equal
/// and `0.0` differs from `-0.0`.
fn primitive_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}
