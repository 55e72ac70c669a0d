// likeness-value - Error types for the value model
// Copyright (c) 2026 Likeness contributors. MIT licensed.

//! Error types for value-model construction and field access.
//!
//! Comparison itself never fails; errors only arise when building class
//! descriptors or addressing object fields that do not exist.

use std::fmt;

/// Result type for value-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or addressing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field not declared anywhere in the object's class lineage
    UnknownField { class: String, field: String },
    /// Class name not present in the object's lineage
    UnknownClass { class: String },
    /// Field is static and has no per-instance value
    StaticField { class: String, field: String },
    /// Field declared twice on the same class
    DuplicateField { class: String, field: String },
}

impl Error {
    /// Create an unknown-field error.
    pub fn unknown_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Error::UnknownField {
            class: class.into(),
            field: field.into(),
        }
    }

    /// Create an unknown-class error.
    pub fn unknown_class(class: impl Into<String>) -> Self {
        Error::UnknownClass {
            class: class.into(),
        }
    }

    /// Create a static-field error.
    pub fn static_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Error::StaticField {
            class: class.into(),
            field: field.into(),
        }
    }

    /// Create a duplicate-field error.
    pub fn duplicate_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Error::DuplicateField {
            class: class.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownField { class, field } => {
                write!(f, "Undefined field '{}' on class '{}'", field, class)
            }
            Error::UnknownClass { class } => {
                write!(f, "Class '{}' is not in the object's lineage", class)
            }
            Error::StaticField { class, field } => {
                write!(
                    f,
                    "Field '{}::{}' is static and carries no instance value",
                    class, field
                )
            }
            Error::DuplicateField { class, field } => {
                write!(f, "Field '{}' declared twice on class '{}'", field, class)
            }
        }
    }
}

impl std::error::Error for Error {}
