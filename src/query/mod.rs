//! Scoped query entry points over registered record types.
//!
//! `all` and `find` apply the type's default filter, so soft-deleted records
//! never appear in them. Named scopes (`deleted`, or a custom one like
//! `archived`) select only soft-deleted records. The unscoped variants bypass
//! filtering entirely; hard deletes and restore targets are located through
//! them.

use crate::document::{Document, DocumentLocation, Record};
use crate::schema::{RegisteredType, TypeRegistry};
use crate::store::FilterSet;
use thiserror::Error;

/// Errors surfaced by scoped queries.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown record type: {0}")]
    UnknownType(String),

    #[error("Unknown scope '{scope}' for record type {type_name}")]
    UnknownScope { type_name: String, scope: String },

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

fn registered<'a>(
    registry: &'a TypeRegistry,
    type_name: &str,
) -> Result<&'a RegisteredType, QueryError> {
    registry
        .get(type_name)
        .ok_or_else(|| QueryError::UnknownType(type_name.to_string()))
}

fn hydrate(type_name: &str, document: Document) -> Record {
    Record::hydrated(
        type_name,
        DocumentLocation::root(document.id),
        document.attributes,
    )
}

async fn list_with(
    registry: &TypeRegistry,
    type_name: &str,
    filter: &FilterSet,
) -> Result<Vec<Record>, QueryError> {
    let registered = registered(registry, type_name)?;
    let documents = registered.collection.list(filter).await?;
    Ok(documents
        .into_iter()
        .map(|d| hydrate(type_name, d))
        .collect())
}

/// All records the default filter admits.
pub async fn all(registry: &TypeRegistry, type_name: &str) -> Result<Vec<Record>, QueryError> {
    let filter = registered(registry, type_name)?.definition.default_filter();
    list_with(registry, type_name, &filter).await
}

/// Records admitted by the named scope (e.g. `deleted`).
pub async fn scoped(
    registry: &TypeRegistry,
    type_name: &str,
    scope: &str,
) -> Result<Vec<Record>, QueryError> {
    let definition = &registered(registry, type_name)?.definition;
    let filter = definition
        .scope(scope)
        .ok_or_else(|| QueryError::UnknownScope {
            type_name: type_name.to_string(),
            scope: scope.to_string(),
        })?;
    list_with(registry, type_name, &filter).await
}

/// Every stored record, bypassing default filtering.
pub async fn unscoped(registry: &TypeRegistry, type_name: &str) -> Result<Vec<Record>, QueryError> {
    list_with(registry, type_name, &FilterSet::unscoped()).await
}

/// Find one record by location, applying the default filter.
pub async fn find(
    registry: &TypeRegistry,
    type_name: &str,
    location: &DocumentLocation,
) -> Result<Option<Record>, QueryError> {
    let registered = registered(registry, type_name)?;
    let filter = registered.definition.default_filter();
    let attributes = registered.collection.find_one(location, &filter).await?;
    Ok(attributes.map(|a| Record::hydrated(type_name, location.clone(), a)))
}

/// Find one record by location, bypassing default filtering.
pub async fn find_unscoped(
    registry: &TypeRegistry,
    type_name: &str,
    location: &DocumentLocation,
) -> Result<Option<Record>, QueryError> {
    let registered = registered(registry, type_name)?;
    let attributes = registered
        .collection
        .find_one(location, &FilterSet::unscoped())
        .await?;
    Ok(attributes.map(|a| Record::hydrated(type_name, location.clone(), a)))
}
