//! REST wire types and the search transport seam

mod search;

pub use search::{
    Filter, FilterGroup, FilterOperator, SearchBackend, SearchRequest, TransportError,
};
