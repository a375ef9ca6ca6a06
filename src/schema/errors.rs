//! # Schema Errors
//!
//! Error types for schema lookup, projection narrowing, and response
//! validation. Every variant carries enough field-level detail to point the
//! caller at the exact mismatch between the request and the declared schema.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema mismatch between client expectations and backend reality.
///
/// These errors are not retryable without changing the request or the
/// generated schema metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    // ==================
    // Projection Errors (pre-call)
    // ==================
    /// A selected property is not declared on the collection
    #[error("property '{property}' is not part of the '{collection}' schema")]
    UnknownProperty {
        collection: String,
        property: String,
    },

    // ==================
    // Response Envelope Errors (post-call)
    // ==================
    /// A raw response row does not match the fixed envelope shape
    #[error("row {index}: field '{field}': expected {expected}, got {actual}")]
    MalformedRow {
        index: usize,
        field: String,
        expected: String,
        actual: String,
    },

    // ==================
    // Property Validation Errors (post-call)
    // ==================
    /// A property value does not match its declared type
    #[error("property '{property}': expected {expected}, got {actual}")]
    PropertyTypeMismatch {
        property: String,
        expected: String,
        actual: String,
    },

    /// A required property is absent from the response bag
    #[error("required property '{property}' is missing")]
    MissingProperty { property: String },

    /// A required property came back null
    #[error("required property '{property}' must not be null")]
    NullProperty { property: String },
}

impl SchemaError {
    /// Create an unknown property error
    pub fn unknown_property(collection: impl Into<String>, property: impl Into<String>) -> Self {
        SchemaError::UnknownProperty {
            collection: collection.into(),
            property: property.into(),
        }
    }

    /// Create a malformed row error for a missing envelope field
    pub fn missing_envelope_field(
        index: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        SchemaError::MalformedRow {
            index,
            field: field.into(),
            expected: expected.into(),
            actual: "missing".into(),
        }
    }

    /// Create a malformed row error for a mistyped envelope field
    pub fn envelope_type_mismatch(
        index: usize,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        SchemaError::MalformedRow {
            index,
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
