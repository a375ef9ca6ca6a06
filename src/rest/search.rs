//! Wire-level search types and the transport seam
//!
//! The remote search endpoint takes a JSON body of requested properties,
//! filter groups, and offset/limit pagination. Groups are ORed by the
//! backend; filters within a group are ANDed. Everything here serializes to
//! the backend's camelCase wire form.
//!
//! The HTTP call itself lives behind [`SearchBackend`]; the core never
//! constructs a transport error, it only propagates them.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Filter operators the search endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    /// Property equals a value
    Eq,
    /// Property does not equal a value
    Neq,
    /// Property has any value
    HasProperty,
    /// Property has no value
    NotHasProperty,
}

impl FilterOperator {
    /// Returns the wire-level operator name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "EQ",
            FilterOperator::Neq => "NEQ",
            FilterOperator::HasProperty => "HAS_PROPERTY",
            FilterOperator::NotHasProperty => "NOT_HAS_PROPERTY",
        }
    }
}

/// A single wire-level predicate.
///
/// The backend's filter value type is textual, so comparison values are
/// always carried as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Property the filter applies to
    pub property_name: String,
    /// Filter operator
    pub operator: FilterOperator,
    /// Comparison value, present only for EQ/NEQ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Filter {
    /// Create an equality filter
    pub fn eq(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator: FilterOperator::Eq,
            value: Some(value.into()),
        }
    }

    /// Create an inequality filter
    pub fn neq(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator: FilterOperator::Neq,
            value: Some(value.into()),
        }
    }

    /// Create a has-property filter
    pub fn has_property(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator: FilterOperator::HasProperty,
            value: None,
        }
    }

    /// Create a not-has-property filter
    pub fn not_has_property(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            operator: FilterOperator::NotHasProperty,
            value: None,
        }
    }
}

/// An ANDed group of filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

/// One search request in the backend's wire form.
///
/// No sort is ever specified; the backend's default ordering applies and the
/// query layer makes no ordering guarantee of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Target collection name
    pub object_type: String,
    /// Properties to request; empty means backend default fields
    pub properties: Vec<String>,
    /// ORed filter groups; empty means no filtering
    pub filter_groups: Vec<FilterGroup>,
    /// Pagination offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    /// Pagination limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Opaque transport/backend failure, propagated unchanged.
#[derive(Debug)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    /// Wraps an underlying transport failure
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    /// Returns the underlying failure
    pub fn into_source(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.0)
    }
}

/// The remote search collaborator.
///
/// Implementations own transport, auth, retries, timeouts, and cancellation.
/// Rows come back as untyped JSON envelopes; decoding happens in the query
/// pipeline. A cancelled or failed call must surface as an `Err`, never as an
/// empty result.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<Vec<Value>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_wire_names() {
        assert_eq!(FilterOperator::Eq.as_str(), "EQ");
        assert_eq!(FilterOperator::Neq.as_str(), "NEQ");
        assert_eq!(FilterOperator::HasProperty.as_str(), "HAS_PROPERTY");
        assert_eq!(FilterOperator::NotHasProperty.as_str(), "NOT_HAS_PROPERTY");
        assert_eq!(serde_json::to_value(FilterOperator::Eq).unwrap(), json!("EQ"));
    }

    #[test]
    fn test_filter_serializes_camel_case() {
        let filter = Filter::eq("email", "bh@hubspot.com");
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "propertyName": "email",
                "operator": "EQ",
                "value": "bh@hubspot.com",
            })
        );
    }

    #[test]
    fn test_valueless_filter_omits_value() {
        let filter = Filter::not_has_property("email");
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value.get("value"), None);
        assert_eq!(value.get("operator"), Some(&json!("NOT_HAS_PROPERTY")));
    }

    #[test]
    fn test_search_request_wire_shape() {
        let request = SearchRequest {
            object_type: "contacts".into(),
            properties: vec!["email".into()],
            filter_groups: vec![FilterGroup {
                filters: vec![Filter::eq("email", "x@y.com")],
            }],
            after: Some(10),
            limit: Some(5),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "objectType": "contacts",
                "properties": ["email"],
                "filterGroups": [
                    {"filters": [{"propertyName": "email", "operator": "EQ", "value": "x@y.com"}]}
                ],
                "after": 10,
                "limit": 5,
            })
        );
    }

    #[test]
    fn test_unpaginated_request_omits_after_and_limit() {
        let request = SearchRequest {
            object_type: "contacts".into(),
            properties: vec![],
            filter_groups: vec![],
            after: None,
            limit: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value.get("after"), None);
        assert_eq!(value.get("limit"), None);
    }
}
