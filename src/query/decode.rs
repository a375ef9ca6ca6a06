//! Response decoder
//!
//! Every raw row must satisfy the fixed envelope shape before its properties
//! bag is narrowed by the resolved projection validator. A single bad row
//! fails the whole call; there is no per-row recovery and no partial result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::schema::{json_type_name, CollectionSchema, SchemaError, SchemaResult};

/// The decoded result unit of a query.
///
/// Envelope fields plus a properties bag restricted to the requested (or
/// default) property set. Owned solely by the caller after return; nothing
/// is cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Backend object id
    pub id: String,
    /// Validated, narrowed properties
    pub properties: BTreeMap<String, Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Whether the backend has archived the object
    pub archived: bool,
}

/// Decodes raw search rows into typed records.
///
/// # Errors
///
/// `SchemaError::MalformedRow` if any row violates the envelope shape;
/// property-level errors from the validator if a bag fails its declared
/// types. Either way the entire call fails.
pub fn decode_rows(rows: &[Value], validator: &CollectionSchema) -> SchemaResult<Vec<Record>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| decode_row(index, row, validator))
        .collect()
}

fn decode_row(index: usize, row: &Value, validator: &CollectionSchema) -> SchemaResult<Record> {
    let envelope = row.as_object().ok_or_else(|| {
        SchemaError::envelope_type_mismatch(index, "$root", "object", json_type_name(row))
    })?;

    let id = envelope_str(index, envelope, "id")?.to_string();
    let created_at = envelope_timestamp(index, envelope, "createdAt")?;
    let updated_at = envelope_timestamp(index, envelope, "updatedAt")?;

    let archived = match envelope.get("archived") {
        None => return Err(SchemaError::missing_envelope_field(index, "archived", "bool")),
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(SchemaError::envelope_type_mismatch(
                index,
                "archived",
                "bool",
                json_type_name(other),
            ))
        }
    };

    let bag = match envelope.get("properties") {
        None => {
            return Err(SchemaError::missing_envelope_field(
                index,
                "properties",
                "object",
            ))
        }
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(SchemaError::envelope_type_mismatch(
                index,
                "properties",
                "object",
                json_type_name(other),
            ))
        }
    };

    let properties = validator.validate(bag)?;

    Ok(Record {
        id,
        properties,
        created_at,
        updated_at,
        archived,
    })
}

fn envelope_str<'a>(
    index: usize,
    envelope: &'a serde_json::Map<String, Value>,
    field: &str,
) -> SchemaResult<&'a str> {
    match envelope.get(field) {
        None => Err(SchemaError::missing_envelope_field(index, field, "string")),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SchemaError::envelope_type_mismatch(
            index,
            field,
            "string",
            json_type_name(other),
        )),
    }
}

fn envelope_timestamp(
    index: usize,
    envelope: &serde_json::Map<String, Value>,
    field: &str,
) -> SchemaResult<DateTime<Utc>> {
    let raw = envelope_str(index, envelope, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            SchemaError::envelope_type_mismatch(
                index,
                field,
                "RFC 3339 timestamp",
                "malformed timestamp",
            )
        })
}
