//! Schema descriptor types
//!
//! A collection schema is a declarative description of the properties the
//! backend may return for one collection: a type tag per property plus the
//! default projection used when the caller selects nothing.
//!
//! Descriptors support two operations:
//! - `validate`: narrow an untyped properties bag to the declared properties,
//!   enforcing each declared type exactly
//! - `pick`: restrict the descriptor to a named subset, failing closed on any
//!   key absent from the schema

use serde_json::Value;
use std::collections::BTreeMap;

use super::errors::{SchemaError, SchemaResult};

/// Supported property value types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// UTF-8 string
    String,
    /// JSON number
    Number,
    /// Boolean
    Bool,
    /// RFC 3339 timestamp carried as a string
    DateTime,
}

impl PropertyType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Bool => "bool",
            PropertyType::DateTime => "datetime",
        }
    }

    /// Exact type check, no coercion
    fn matches(&self, value: &Value) -> bool {
        match self {
            PropertyType::String => value.is_string(),
            PropertyType::Number => value.is_number(),
            PropertyType::Bool => value.is_boolean(),
            PropertyType::DateTime => value
                .as_str()
                .map(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
                .unwrap_or(false),
        }
    }
}

/// A single property declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Declared value type
    pub property_type: PropertyType,
    /// Whether the property must be present and non-null in every row
    pub required: bool,
}

impl PropertyDef {
    /// Create a required string property
    pub fn required_string() -> Self {
        Self {
            property_type: PropertyType::String,
            required: true,
        }
    }

    /// Create an optional string property
    pub fn optional_string() -> Self {
        Self {
            property_type: PropertyType::String,
            required: false,
        }
    }

    /// Create a required number property
    pub fn required_number() -> Self {
        Self {
            property_type: PropertyType::Number,
            required: true,
        }
    }

    /// Create an optional number property
    pub fn optional_number() -> Self {
        Self {
            property_type: PropertyType::Number,
            required: false,
        }
    }

    /// Create an optional bool property
    pub fn optional_bool() -> Self {
        Self {
            property_type: PropertyType::Bool,
            required: false,
        }
    }

    /// Create a required datetime property
    pub fn required_datetime() -> Self {
        Self {
            property_type: PropertyType::DateTime,
            required: true,
        }
    }

    /// Create an optional datetime property
    pub fn optional_datetime() -> Self {
        Self {
            property_type: PropertyType::DateTime,
            required: false,
        }
    }
}

/// Declarative schema for one collection's properties.
///
/// Validation does not mutate the input bag and is deterministic: properties
/// are checked in name order, undeclared keys are dropped rather than
/// rejected (the backend is free to return extra bookkeeping properties).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    collection: String,
    properties: BTreeMap<String, PropertyDef>,
    default_projection: Vec<String>,
}

impl CollectionSchema {
    /// Creates a new schema descriptor
    pub fn new(
        collection: impl Into<String>,
        properties: BTreeMap<String, PropertyDef>,
        default_projection: Vec<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            properties,
            default_projection,
        }
    }

    /// Returns the collection name this schema describes
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the declared property definition, if any
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// Returns the declared property names in sorted order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Returns the properties the backend sends when nothing is selected
    pub fn default_projection(&self) -> &[String] {
        &self.default_projection
    }

    /// Restricts the schema to exactly the named properties.
    ///
    /// Fails closed: any requested name absent from the schema is an error,
    /// never silently dropped.
    pub fn pick(&self, names: &[String]) -> SchemaResult<CollectionSchema> {
        let mut picked = BTreeMap::new();
        for name in names {
            let def = self
                .properties
                .get(name)
                .ok_or_else(|| SchemaError::unknown_property(&self.collection, name))?;
            picked.insert(name.clone(), def.clone());
        }
        Ok(CollectionSchema {
            collection: self.collection.clone(),
            properties: picked,
            default_projection: names.to_vec(),
        })
    }

    /// Validates a raw properties bag and narrows it to the declared set.
    ///
    /// # Errors
    ///
    /// - `PropertyTypeMismatch` if a present value fails its declared type
    /// - `MissingProperty` if a required property is absent
    /// - `NullProperty` if a required property is null
    pub fn validate(
        &self,
        bag: &serde_json::Map<String, Value>,
    ) -> SchemaResult<BTreeMap<String, Value>> {
        let mut narrowed = BTreeMap::new();

        for (name, def) in &self.properties {
            match bag.get(name) {
                Some(Value::Null) => {
                    if def.required {
                        return Err(SchemaError::NullProperty {
                            property: name.clone(),
                        });
                    }
                    narrowed.insert(name.clone(), Value::Null);
                }
                Some(value) => {
                    if !def.property_type.matches(value) {
                        return Err(SchemaError::PropertyTypeMismatch {
                            property: name.clone(),
                            expected: def.property_type.type_name().into(),
                            actual: json_type_name(value).into(),
                        });
                    }
                    narrowed.insert(name.clone(), value.clone());
                }
                None => {
                    if def.required {
                        return Err(SchemaError::MissingProperty {
                            property: name.clone(),
                        });
                    }
                }
            }
        }

        Ok(narrowed)
    }
}

/// Returns the JSON type name for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
