// likeness-value - Insertion-ordered keyed container
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Insertion-ordered keyed container.
//!
//! `Container` models an associative container whose key sequence *and* key
//! order are both significant: `{"a" 1, "b" 2}` and `{"b" 2, "a" 1}` are
//! different containers. Keys are primitives (integer or string). Sequential
//! data is the special case of integer keys `0..n`.

use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::value::{write_escaped, Value};

/// A container key: an integer or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKey {
    Int(i64),
    Str(Rc<str>),
}

impl From<i64> for ContainerKey {
    fn from(n: i64) -> Self {
        ContainerKey::Int(n)
    }
}

impl From<&str> for ContainerKey {
    fn from(s: &str) -> Self {
        ContainerKey::Str(Rc::from(s))
    }
}

impl From<String> for ContainerKey {
    fn from(s: String) -> Self {
        ContainerKey::Str(Rc::from(s))
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKey::Int(n) => write!(f, "{}", n),
            ContainerKey::Str(s) => write_escaped(f, s),
        }
    }
}

/// An ordered sequence of `(key, value)` entries.
///
/// Assigning to an existing key replaces its value in place, keeping the
/// key's original position; assigning a new key appends it. Backed by a
/// persistent vector, so cloning a container is cheap and shares structure.
#[derive(Clone, Default)]
pub struct Container {
    entries: Vector<(ContainerKey, Value)>,
}

impl Container {
    /// Create a new empty container.
    pub fn new() -> Self {
        Container {
            entries: Vector::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assign `value` to `key`.
    ///
    /// An existing key keeps its position; a new key is appended at the end.
    pub fn insert(&mut self, key: impl Into<ContainerKey>, value: Value) {
        let key = key.into();
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.set(index, (key, value));
        } else {
            self.entries.push_back((key, value));
        }
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &ContainerKey) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ContainerKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate over `(key, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(ContainerKey, Value)> {
        self.entries.iter()
    }
}

impl FromIterator<Value> for Container {
    /// Build a sequential container: integer keys `0..n` in order.
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut container = Container::new();
        for (index, value) in iter.into_iter().enumerate() {
            container.insert(index as i64, value);
        }
        container
    }
}

impl<K: Into<ContainerKey>> FromIterator<(K, Value)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
