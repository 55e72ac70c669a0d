// likeness-core - Common test utilities
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Shared fixtures and helpers for Likeness integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`assert_equals_both`] - Assert a verdict in both argument orders
//! - [`seq`] / [`assoc`] - Container builders
//! - [`plain_class`] / [`plain_object`] - Flat two-field object fixtures
//! - [`parent_class`] / [`parent_object`] - Base class with private fields
//! - [`child_class`] / [`child_object`] - Subclass re-declaring a private field
//! - [`node_class`] / [`node`] / [`link`] - Cyclic graph fixtures

// Not every test binary uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::rc::Rc;

pub use likeness_core::{equals, Comparator};
pub use likeness_value::{
    ClassDef, Comparison, Container, ContainerKey, EqualityComparable, FieldDef, ObjectInstance,
    Value, Visibility,
};

/// Assert a verdict in both argument orders.
///
/// Structural comparison is symmetric, so every fixture is checked both
/// ways.
pub fn assert_equals_both(left: &Value, right: &Value, expected: bool) {
    let comparator = Comparator::new();
    assert_eq!(
        comparator.equals(left, right),
        expected,
        "equals({}, {}) should be {}",
        left,
        right,
        expected
    );
    assert_eq!(
        comparator.equals(right, left),
        expected,
        "equals({}, {}) should be {}",
        right,
        left,
        expected
    );
}

/// Build a sequential container (integer keys `0..n`).
pub fn seq(values: Vec<Value>) -> Value {
    Value::container(values.into_iter().collect())
}

/// Build an associative container with string keys, in the given order.
pub fn assoc(entries: Vec<(&str, Value)>) -> Value {
    Value::container(entries.into_iter().collect())
}

/// A flat class with two public fields, standing in for an anonymous
/// object shape.
pub fn plain_class() -> Rc<ClassDef> {
    let mut class = ClassDef::new("Plain");
    class.add_field(FieldDef::new("foo", Visibility::Public)).unwrap();
    class.add_field(FieldDef::new("baz", Visibility::Public)).unwrap();
    Rc::new(class)
}

/// A `Plain` instance with both fields set.
pub fn plain_object(foo: Value, baz: Value) -> Value {
    let object = ObjectInstance::new(plain_class());
    object.set("foo", foo).unwrap();
    object.set("baz", baz).unwrap();
    Value::object(object)
}

/// `ParentObject`: two private fields, `foo` and `bar`.
pub fn parent_class() -> Rc<ClassDef> {
    let mut class = ClassDef::new("ParentObject");
    class.add_field(FieldDef::new("foo", Visibility::Private)).unwrap();
    class.add_field(FieldDef::new("bar", Visibility::Private)).unwrap();
    Rc::new(class)
}

/// A `ParentObject` instance with both fields set.
pub fn parent_object(foo: Value, bar: Value) -> Value {
    let object = ObjectInstance::new(parent_class());
    object.set("foo", foo).unwrap();
    object.set("bar", bar).unwrap();
    Value::object(object)
}

/// `ChildObject` extends `ParentObject` and privately re-declares `foo` at
/// its own level, so instances carry three independent slots:
/// `ChildObject::foo`, `ParentObject::foo`, and `ParentObject::bar`.
pub fn child_class() -> Rc<ClassDef> {
    let mut class = ClassDef::with_parent("ChildObject", parent_class());
    class.add_field(FieldDef::new("foo", Visibility::Private)).unwrap();
    Rc::new(class)
}

/// A `ChildObject` instance with `foo` mirrored at both lineage levels.
pub fn child_object(foo: Value, bar: Value) -> Value {
    let object = ObjectInstance::new(child_class());
    object.set_declared("ChildObject", "foo", foo.clone()).unwrap();
    object.set_declared("ParentObject", "foo", foo).unwrap();
    object.set_declared("ParentObject", "bar", bar).unwrap();
    Value::object(object)
}

/// `Node`: a public `tag` and a public `next` link, for cyclic graphs.
pub fn node_class() -> Rc<ClassDef> {
    let mut class = ClassDef::new("Node");
    class.add_field(FieldDef::new("tag", Visibility::Public)).unwrap();
    class.add_field(FieldDef::new("next", Visibility::Public)).unwrap();
    Rc::new(class)
}

/// A `Node` instance with the given tag and no link yet.
pub fn node(tag: Value) -> Rc<ObjectInstance> {
    let object = ObjectInstance::new(node_class());
    object.set("tag", tag).unwrap();
    object
}

/// Point `from.next` at `to`. Linking a node to itself builds a cycle.
pub fn link(from: &Rc<ObjectInstance>, to: &Rc<ObjectInstance>) {
    from.set("next", Value::object(Rc::clone(to))).unwrap();
}
