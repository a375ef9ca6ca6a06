//! Caller-facing client surface
//!
//! A client is a thin bundle of the transport collaborator and the builtin
//! schema registry. Per-collection handles expose the one query operation.

use std::sync::Arc;

use crate::query::CollectionHandle;
use crate::rest::SearchBackend;
use crate::schema::{Collection, SchemaRegistry};

/// Typed query client over the remote object-search API.
///
/// Cheap to clone; safe to share across tasks. The backend owns every
/// transport concern (auth, retries, timeouts).
#[derive(Clone)]
pub struct HubModelClient {
    backend: Arc<dyn SearchBackend>,
    registry: Arc<SchemaRegistry>,
}

impl HubModelClient {
    /// Creates a client over the given search backend
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            registry: Arc::new(SchemaRegistry::builtin()),
        }
    }

    /// Returns a query handle for an arbitrary collection
    pub fn collection(&self, collection: Collection) -> CollectionHandle {
        CollectionHandle::new(collection, self.backend.clone(), self.registry.clone())
    }

    /// Returns the contacts query handle
    pub fn contacts(&self) -> CollectionHandle {
        self.collection(Collection::Contacts)
    }

    /// Returns the companies query handle
    pub fn companies(&self) -> CollectionHandle {
        self.collection(Collection::Companies)
    }

    /// Returns the deals query handle
    pub fn deals(&self) -> CollectionHandle {
        self.collection(Collection::Deals)
    }
}
