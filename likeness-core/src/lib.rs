// likeness-core - Deep structural equality engine for Likeness values
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! # likeness-core
//!
//! The comparison engine for Likeness values: a single `equals` verdict over
//! two [`Value`]s, recursing through containers and object graphs with an
//! object-pair cycle guard.
//!
//! ```
//! use likeness_core::{equals, Value};
//!
//! assert!(equals(&Value::int(42), &Value::int(42)));
//! assert!(!equals(&Value::int(0), &Value::string("0")));
//! ```

pub mod comparator;
pub mod context;

pub use comparator::Comparator;
pub use context::{ComparisonContext, PairKey};

// Re-export value-model types for convenience
pub use likeness_value::{
    ClassDef, Comparison, Container, ContainerKey, EqualityComparable, FieldDef, Kind,
    ObjectInstance, Value, Visibility,
};

/// Compare two values with a throwaway [`Comparator`].
pub fn equals(left: &Value, right: &Value) -> bool {
    Comparator::new().equals(left, right)
}
