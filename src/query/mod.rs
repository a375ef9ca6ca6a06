//! Query pipeline subsystem for hubmodel
//!
//! Translates a declarative find-many request into the backend's wire-level
//! search form and validates the raw response back into typed records.
//!
//! # Pipeline (strict order)
//!
//! 1. Validate pagination arguments
//! 2. Compile the where clause into filter groups
//! 3. Resolve the projection into property names plus a narrowed validator
//! 4. Issue one search call through the transport collaborator
//! 5. Validate each row's envelope, then narrow its properties bag
//! 6. Return typed records
//!
//! # Invariants
//!
//! - Caller-input errors surface before any network call
//! - Any row failure aborts the whole call; no partial results
//! - Transport failures propagate unchanged, never wrapped or retried

mod decode;
mod errors;
mod executor;
mod select;
mod where_clause;

pub use decode::{decode_rows, Record};
pub use errors::{QueryError, QueryResult};
pub use executor::{CollectionHandle, FindManyArgs};
pub use select::{resolve_projection, ResolvedProjection, SelectClause};
pub use where_clause::{compile_where, Predicate, WhereClause};
