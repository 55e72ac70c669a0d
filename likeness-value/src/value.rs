// likeness-value - Value types for Likeness
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Core value type for Likeness.
//!
//! `Value` is the central enum representing every datum the comparison
//! engine can inspect: primitives, insertion-ordered containers, and
//! class-typed objects.

use std::fmt;
use std::rc::Rc;

use crate::class::ObjectInstance;
use crate::container::Container;

/// The discriminated kind of a [`Value`].
///
/// Primitives are kind-strict: an `Int` is never equal to a `Float` or a
/// `String`, even when the underlying numbers or digits would coerce equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Float,
    String,
    Container,
    Object,
}

/// A runtime value subject to deep comparison.
///
/// Values are immutable from the comparison engine's point of view. Objects
/// use reference counting so the same instance can appear in several places
/// of a graph, including cyclically.
#[derive(Clone)]
pub enum Value {
    /// The nil value, representing nothing/absence
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Immutable string
    String(Rc<str>),
    /// Insertion-ordered keyed container
    Container(Container),
    /// Instance of a declared class
    Object(Rc<ObjectInstance>),
}

impl Value {
    /// Create a nil value.
    pub fn nil() -> Self {
        Value::Nil
    }

    /// Create a boolean value.
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create a container value.
    pub fn container(container: Container) -> Self {
        Value::Container(container)
    }

    /// Create an object value.
    pub fn object(object: Rc<ObjectInstance>) -> Self {
        Value::Object(object)
    }

    /// Get the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Container(_) => Kind::Container,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Get a human-readable type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Container(_) => "container",
            Value::Object(_) => "object",
        }
    }

    /// Check if this value is nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if this value is a container.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// Check if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get the integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the container, if this is a `Container`.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Get the object, if this is an `Object`.
    pub fn as_object(&self) -> Option<&Rc<ObjectInstance>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Value::Container(container)
    }
}

impl From<Rc<ObjectInstance>> for Value {
    fn from(object: Rc<ObjectInstance>) -> Self {
        Value::Object(object)
    }
}

/// Write a string with the usual escapes so printed values round-trip
/// visually.
pub(crate) fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for ch in s.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            _ => write!(f, "{}", ch)?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}", if *n > 0.0 { "inf" } else { "-inf" })
                } else if n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write_escaped(f, s),
            Value::Container(container) => write!(f, "{}", container),
            // Objects print opaquely: an object graph may be cyclic.
            Value::Object(object) => write!(f, "{}", object),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
