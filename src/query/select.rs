//! Projection resolver
//!
//! Maps a select clause onto (a) the property names to request from the
//! backend and (b) a validator narrowed to exactly those properties. With no
//! clause, the backend's default fields are requested and the unrestricted
//! collection schema validates the response.

use crate::schema::{CollectionSchema, SchemaResult};

/// The set of property names the caller wants returned.
///
/// Selection is a set, not a value map; order is kept for the wire request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectClause {
    properties: Vec<String>,
}

impl SelectClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property to the selection
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.properties.push(name.into());
        self
    }

    /// Returns the selected property names in caller order
    pub fn names(&self) -> &[String] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectClause {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A resolved projection: what to request, and how to validate what returns
#[derive(Debug, Clone)]
pub struct ResolvedProjection {
    /// Property names for the search request; empty means backend defaults
    pub properties: Vec<String>,
    /// Validator restricted to exactly the requested properties
    pub validator: CollectionSchema,
}

/// Resolves a select clause against a collection schema.
///
/// # Errors
///
/// `SchemaError::UnknownProperty` if the clause names a property the schema
/// does not declare. The restriction fails closed; nothing is dropped.
pub fn resolve_projection(
    schema: &CollectionSchema,
    select: Option<&SelectClause>,
) -> SchemaResult<ResolvedProjection> {
    match select {
        None => Ok(ResolvedProjection {
            properties: Vec::new(),
            validator: schema.clone(),
        }),
        Some(clause) => {
            let validator = schema.pick(clause.names())?;
            Ok(ResolvedProjection {
                properties: clause.names().to_vec(),
                validator,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Collection, SchemaError, SchemaRegistry};

    fn contacts() -> CollectionSchema {
        SchemaRegistry::builtin().get(Collection::Contacts).clone()
    }

    #[test]
    fn test_no_select_uses_backend_defaults_and_full_schema() {
        let schema = contacts();
        let projection = resolve_projection(&schema, None).unwrap();

        assert!(projection.properties.is_empty());
        assert_eq!(projection.validator, schema);
    }

    #[test]
    fn test_select_narrows_properties_and_validator() {
        let schema = contacts();
        let select = SelectClause::new().property("email");
        let projection = resolve_projection(&schema, Some(&select)).unwrap();

        assert_eq!(projection.properties, vec!["email".to_string()]);
        assert_eq!(
            projection.validator.property_names().collect::<Vec<_>>(),
            vec!["email"]
        );
    }

    #[test]
    fn test_unknown_property_fails_closed() {
        let schema = contacts();
        let select = SelectClause::new()
            .property("hs_all_accessible_team_ids")
            .property("address")
            .property("fake_property_that_doesnt_exist");

        let err = resolve_projection(&schema, Some(&select)).unwrap_err();
        assert_eq!(
            err,
            SchemaError::unknown_property("contacts", "fake_property_that_doesnt_exist")
        );
    }

    #[test]
    fn test_select_clause_from_iterator() {
        let select: SelectClause = ["email", "firstname"].into_iter().collect();
        assert_eq!(select.names(), &["email".to_string(), "firstname".to_string()]);
    }
}
