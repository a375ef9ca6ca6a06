//! hubmodel - a strict, typed query layer over a CRM object-search API
//!
//! Callers describe "find many records" requests declaratively (selection,
//! equality/inequality predicates, offset+limit pagination) against a fixed
//! schema of named collections. The pipeline compiles the request into the
//! backend's search form, executes it through an injected transport
//! collaborator, and validates raw rows back into typed records.

pub mod client;
pub mod query;
pub mod rest;
pub mod schema;

pub use client::HubModelClient;
