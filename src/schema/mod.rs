//! Schema Registry subsystem for hubmodel
//!
//! The remote CRM declares a fixed set of collections, each with a fixed set
//! of typed properties. This module holds the generated-metadata view of that
//! schema and the descriptor operations the query pipeline relies on.
//!
//! # Design Principles
//!
//! - Read-only at runtime; built once, shared freely
//! - Narrowing is explicit: `pick` fails closed on unknown properties
//! - Validation is exact: no coercion, no defaults, deterministic order

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{Collection, SchemaRegistry};
pub use types::{CollectionSchema, PropertyDef, PropertyType};

pub(crate) use types::json_type_name;
