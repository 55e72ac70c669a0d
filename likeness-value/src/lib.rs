// likeness-value - Value model for Likeness
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! # likeness-value
//!
//! The value model for Likeness: a read-only abstraction over dynamically
//! shaped runtime values. `Value` is the central enum covering primitives,
//! insertion-ordered keyed containers, and class-typed objects.
//!
//! This crate only describes values; the comparison engine that walks them
//! lives in `likeness-core`.

pub mod class;
pub mod comparable;
pub mod container;
pub mod error;
pub mod value;

pub use class::{ClassDef, FieldDef, ObjectInstance, Visibility};
pub use comparable::{Comparison, EqualityComparable};
pub use container::{Container, ContainerKey};
pub use error::{Error, Result};
pub use value::{Kind, Value};
