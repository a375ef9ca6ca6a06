//! Query executor
//!
//! One linear pipeline per call: validate arguments, compile the predicate,
//! resolve the projection, issue the search, decode the rows. The backend
//! call is the only suspension point and nothing mutates shared state, so
//! concurrent calls need no coordination.

use std::sync::Arc;
use tracing::debug;

use super::decode::{decode_rows, Record};
use super::errors::{QueryError, QueryResult};
use super::select::{resolve_projection, SelectClause};
use super::where_clause::{compile_where, WhereClause};
use crate::rest::{SearchBackend, SearchRequest};
use crate::schema::{Collection, SchemaRegistry};

/// Arguments to a `find_many` call.
///
/// `take`/`skip` map onto the backend's offset pagination (`limit`/`after`).
/// Zero is accepted for both; "positive" in the rejection messages means
/// non-negative.
#[derive(Debug, Clone, Default)]
pub struct FindManyArgs {
    pub select: Option<SelectClause>,
    pub r#where: Option<WhereClause>,
    pub take: Option<i64>,
    pub skip: Option<i64>,
}

impl FindManyArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the projection
    pub fn select(mut self, select: SelectClause) -> Self {
        self.select = Some(select);
        self
    }

    /// Sets the predicate
    pub fn filter(mut self, where_clause: WhereClause) -> Self {
        self.r#where = Some(where_clause);
        self
    }

    /// Sets the result limit
    pub fn take(mut self, take: i64) -> Self {
        self.take = Some(take);
        self
    }

    /// Sets the result offset
    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }
}

/// Per-collection query surface.
///
/// Handles are cheap to clone and hold no mutable state; the registry and
/// backend behind them are shared read-only.
#[derive(Clone)]
pub struct CollectionHandle {
    collection: Collection,
    backend: Arc<dyn SearchBackend>,
    registry: Arc<SchemaRegistry>,
}

impl CollectionHandle {
    pub(crate) fn new(
        collection: Collection,
        backend: Arc<dyn SearchBackend>,
        registry: Arc<SchemaRegistry>,
    ) -> Self {
        Self {
            collection,
            backend,
            registry,
        }
    }

    /// Returns the collection this handle queries
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Finds records matching the given selection, predicate, and pagination.
    ///
    /// # Errors
    ///
    /// - `QueryError::Validation` for negative `take`/`skip` or a malformed
    ///   where key, detected before any network call
    /// - `QueryError::Schema` for unknown selected properties (pre-call) or
    ///   response rows violating the declared schema (post-call)
    /// - `QueryError::Transport` for backend failures, propagated unchanged
    pub async fn find_many(&self, args: FindManyArgs) -> QueryResult<Vec<Record>> {
        if let Some(take) = args.take {
            if take < 0 {
                return Err(QueryError::validation("take must be positive"));
            }
        }
        if let Some(skip) = args.skip {
            if skip < 0 {
                return Err(QueryError::validation("skip must be positive"));
            }
        }

        let filter_groups = compile_where(args.r#where.as_ref())?;
        let schema = self.registry.get(self.collection);
        let projection = resolve_projection(schema, args.select.as_ref())?;

        let filters = filter_groups.first().map(|g| g.filters.len()).unwrap_or(0);
        debug!(
            collection = self.collection.name(),
            filters,
            properties = projection.properties.len(),
            "issuing search"
        );

        let request = SearchRequest {
            object_type: self.collection.name().to_string(),
            properties: projection.properties.clone(),
            filter_groups,
            after: args.skip,
            limit: args.take,
        };

        let rows = self.backend.search(request).await?;
        let records = decode_rows(&rows, &projection.validator)?;

        debug!(
            collection = self.collection.name(),
            rows = records.len(),
            "decoded search results"
        );
        Ok(records)
    }
}
