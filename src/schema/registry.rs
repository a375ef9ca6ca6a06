//! Generated-metadata schema registry
//!
//! Collections form a closed set; the per-collection property tables below
//! mirror the generated metadata for the remote CRM schema. The registry is
//! built once and shared read-only for the lifetime of the process.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{CollectionSchema, PropertyDef};

/// The closed set of collections the remote schema declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Companies,
    Deals,
}

impl Collection {
    /// Returns the wire-level collection name
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Contacts => "contacts",
            Collection::Companies => "companies",
            Collection::Deals => "deals",
        }
    }

    /// Returns every known collection
    pub fn all() -> [Collection; 3] {
        [Collection::Contacts, Collection::Companies, Collection::Deals]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only mapping from collection to its schema descriptor.
///
/// Lookup is total over the closed `Collection` enum, so `get` cannot fail.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    contacts: CollectionSchema,
    companies: CollectionSchema,
    deals: CollectionSchema,
}

impl SchemaRegistry {
    /// Builds the registry from the generated property tables
    pub fn builtin() -> Self {
        Self {
            contacts: contacts_schema(),
            companies: companies_schema(),
            deals: deals_schema(),
        }
    }

    /// Returns the schema descriptor for a collection
    pub fn get(&self, collection: Collection) -> &CollectionSchema {
        match collection {
            Collection::Contacts => &self.contacts,
            Collection::Companies => &self.companies,
            Collection::Deals => &self.deals,
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn contacts_schema() -> CollectionSchema {
    let mut properties = BTreeMap::new();
    properties.insert("address".into(), PropertyDef::optional_string());
    properties.insert("createdate".into(), PropertyDef::required_datetime());
    properties.insert("email".into(), PropertyDef::optional_string());
    properties.insert("firstname".into(), PropertyDef::optional_string());
    properties.insert("followercount".into(), PropertyDef::optional_number());
    properties.insert(
        "hs_all_accessible_team_ids".into(),
        PropertyDef::optional_string(),
    );
    properties.insert("hs_object_id".into(), PropertyDef::required_string());
    properties.insert("lastmodifieddate".into(), PropertyDef::optional_datetime());
    properties.insert("lastname".into(), PropertyDef::optional_string());
    properties.insert("phone".into(), PropertyDef::optional_string());

    CollectionSchema::new(
        "contacts",
        properties,
        vec![
            "createdate".into(),
            "email".into(),
            "firstname".into(),
            "hs_object_id".into(),
            "lastmodifieddate".into(),
            "lastname".into(),
        ],
    )
}

fn companies_schema() -> CollectionSchema {
    let mut properties = BTreeMap::new();
    properties.insert("annualrevenue".into(), PropertyDef::optional_number());
    properties.insert("city".into(), PropertyDef::optional_string());
    properties.insert("createdate".into(), PropertyDef::required_datetime());
    properties.insert("domain".into(), PropertyDef::optional_string());
    properties.insert("hs_object_id".into(), PropertyDef::required_string());
    properties.insert("industry".into(), PropertyDef::optional_string());
    properties.insert("name".into(), PropertyDef::optional_string());
    properties.insert("numberofemployees".into(), PropertyDef::optional_number());

    CollectionSchema::new(
        "companies",
        properties,
        vec![
            "createdate".into(),
            "domain".into(),
            "hs_object_id".into(),
            "name".into(),
        ],
    )
}

fn deals_schema() -> CollectionSchema {
    let mut properties = BTreeMap::new();
    properties.insert("amount".into(), PropertyDef::optional_number());
    properties.insert("closedate".into(), PropertyDef::optional_datetime());
    properties.insert("createdate".into(), PropertyDef::required_datetime());
    properties.insert("dealname".into(), PropertyDef::optional_string());
    properties.insert("dealstage".into(), PropertyDef::optional_string());
    properties.insert("hs_object_id".into(), PropertyDef::required_string());
    properties.insert("pipeline".into(), PropertyDef::optional_string());

    CollectionSchema::new(
        "deals",
        properties,
        vec![
            "amount".into(),
            "closedate".into(),
            "createdate".into(),
            "dealname".into(),
            "dealstage".into(),
            "hs_object_id".into(),
            "pipeline".into(),
        ],
    )
}
