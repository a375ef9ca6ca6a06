//! Predicate compiler
//!
//! Turns a declarative where clause into the backend's filter-group form.
//! The model is a flat conjunction: every emitted filter lands in a single
//! group, so at most one group is ever produced and no disjunction exists.
//!
//! Comparison values are coerced to their string form before transmission.
//! The backend's filter value type is textual, so this narrowing is a wire
//! compatibility constraint, not an accident; callers relying on non-string
//! equality must accept string coercion.

use serde_json::Value;

use super::errors::{QueryError, QueryResult};
use crate::rest::{Filter, FilterGroup};

/// One slot of a predicate: untested, explicitly null, or a concrete value
#[derive(Debug, Clone, PartialEq, Default)]
enum Comparand {
    #[default]
    Unset,
    Null,
    Value(Value),
}

impl Comparand {
    /// A JSON null folds into the presence test, however the caller spells it
    fn of(value: Value) -> Self {
        match value {
            Value::Null => Comparand::Null,
            other => Comparand::Value(other),
        }
    }
}

/// A per-property test with independent `equals` and `not` slots.
///
/// Both slots may be set at once; both filters are then emitted into the same
/// conjunction, so `equals(x).and_not(x)` is unsatisfiable by construction
/// and yields zero rows from any backend.
///
/// A null slot tests presence rather than value: `equals_null` compiles to
/// NOT_HAS_PROPERTY, `not_null` to HAS_PROPERTY.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    equals: Comparand,
    not: Comparand,
}

impl Predicate {
    /// Property equals a value; a JSON null is the same as `equals_null`
    pub fn equals(value: impl Into<Value>) -> Self {
        Self {
            equals: Comparand::of(value.into()),
            not: Comparand::Unset,
        }
    }

    /// Property has no value
    pub fn equals_null() -> Self {
        Self {
            equals: Comparand::Null,
            not: Comparand::Unset,
        }
    }

    /// Property does not equal a value; a JSON null is the same as `not_null`
    pub fn not(value: impl Into<Value>) -> Self {
        Self {
            equals: Comparand::Unset,
            not: Comparand::of(value.into()),
        }
    }

    /// Property has some value
    pub fn not_null() -> Self {
        Self {
            equals: Comparand::Unset,
            not: Comparand::Null,
        }
    }

    /// Adds a not-equal test to an existing predicate; null means `not_null`
    pub fn and_not(mut self, value: impl Into<Value>) -> Self {
        self.not = Comparand::of(value.into());
        self
    }

    /// Adds a has-some-value test to an existing predicate
    pub fn and_not_null(mut self) -> Self {
        self.not = Comparand::Null;
        self
    }

    /// Returns true if neither slot is set
    pub fn is_empty(&self) -> bool {
        self.equals == Comparand::Unset && self.not == Comparand::Unset
    }
}

/// Declarative predicate over property equality/inequality.
///
/// Entries keep insertion order; the backend receives filters in the order
/// the caller declared them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhereClause {
    predicates: Vec<(String, Predicate)>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate for a property
    pub fn field(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.predicates.push((name.into(), predicate));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Compiles the clause into the backend's filter-group form.
    ///
    /// All filters across all properties form one group (flat AND). An
    /// entirely empty clause compiles to no groups at all: a full scan.
    ///
    /// # Errors
    ///
    /// `QueryError::Validation` if a property key is not a usable name.
    pub fn to_filter_groups(&self) -> QueryResult<Vec<FilterGroup>> {
        let mut filters = Vec::new();

        for (key, predicate) in &self.predicates {
            if key.is_empty() {
                return Err(QueryError::validation(
                    "where clause key must be a non-empty property name",
                ));
            }

            match &predicate.equals {
                Comparand::Value(value) => {
                    filters.push(Filter::eq(key.clone(), filter_value(value)));
                }
                Comparand::Null => filters.push(Filter::not_has_property(key.clone())),
                Comparand::Unset => {}
            }

            match &predicate.not {
                Comparand::Value(value) => {
                    filters.push(Filter::neq(key.clone(), filter_value(value)));
                }
                Comparand::Null => filters.push(Filter::has_property(key.clone())),
                Comparand::Unset => {}
            }
        }

        if filters.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![FilterGroup { filters }])
    }
}

/// Compiles an optional where clause; absence means no filtering
pub fn compile_where(where_clause: Option<&WhereClause>) -> QueryResult<Vec<FilterGroup>> {
    match where_clause {
        Some(clause) => clause.to_filter_groups(),
        None => Ok(Vec::new()),
    }
}

/// String form of a comparison value for the textual wire format.
///
/// Strings pass through unquoted; numbers and booleans use their display
/// form, so `equals(123)` compiles to `EQ "123"`.
fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
