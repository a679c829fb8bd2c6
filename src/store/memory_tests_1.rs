use super::*;
use crate::document::{Attributes, Document, DocumentLocation};
use serde_json::{json, Value};

fn attrs(pairs: &[(&str, Value)]) -> Attributes {
    let mut map = Attributes::new();
    for (key, value) in pairs {
        map.insert((*key).to_string(), value.clone());
    }
    map
}

#[tokio::test]
async fn test_insert_and_find() {
    let collection = MemoryCollection::new();
    collection
        .insert(Document::new("p1", attrs(&[("title", json!("First"))])))
        .await;
    let found = collection
        .find_one(&DocumentLocation::root("p1"), &FilterSet::unscoped())
        .await
        .unwrap();
    assert_eq!(found.unwrap().get("title"), Some(&json!("First")));
}

#[tokio::test]
async fn test_insert_assigns_uuid_for_null_id() {
    let collection = MemoryCollection::new();
    let id = collection
        .insert(Document::new(Value::Null, Attributes::new()))
        .await;
    assert!(id.is_string(), "null ids should be replaced");
    let found = collection
        .find_one(&DocumentLocation::Root { id }, &FilterSet::unscoped())
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let collection = MemoryCollection::new();
    let found = collection
        .find_one(&DocumentLocation::root("nope"), &FilterSet::unscoped())
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_respects_filter() {
    let collection = MemoryCollection::new();
    collection
        .insert(Document::new(
            "p1",
            attrs(&[("deleted_at", json!("2026-08-06T00:00:00+00:00"))]),
        ))
        .await;
    let scoped = FilterSet::new().with(Condition::null("deleted_at"));
    let found = collection
        .find_one(&DocumentLocation::root("p1"), &scoped)
        .await
        .unwrap();
    assert!(found.is_none(), "deleted document must not match a null filter");
}

#[tokio::test]
async fn test_list_filters_documents() {
    let collection = MemoryCollection::new();
    collection
        .insert(Document::new("a", attrs(&[("title", json!("Active"))])))
        .await;
    collection
        .insert(Document::new(
            "b",
            attrs(&[("deleted_at", json!("2026-08-06T00:00:00+00:00"))]),
        ))
        .await;
    let active = collection
        .list(&FilterSet::new().with(Condition::null("deleted_at")))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, json!("a"));
    let deleted = collection
        .list(&FilterSet::new().with(Condition::not_null("deleted_at")))
        .await
        .unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, json!("b"));
    assert_eq!(collection.len().await, 2);
}

#[tokio::test]
async fn test_update_set_and_unset() {
    let collection = MemoryCollection::new();
    collection
        .insert(Document::new("p1", attrs(&[("title", json!("First"))])))
        .await;
    let location = DocumentLocation::root("p1");
    collection
        .update_one(
            &location,
            &UpdateDocument::new().set("deleted_at", json!("2026-08-06T00:00:00+00:00")),
        )
        .await
        .unwrap();
    let found = collection
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert!(found.get("deleted_at").is_some());
    assert_eq!(found.get("title"), Some(&json!("First")), "other fields untouched");

    collection
        .update_one(&location, &UpdateDocument::new().unset("deleted_at"))
        .await
        .unwrap();
    let found = collection
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert!(found.get("deleted_at").is_none(), "unset removes the field entirely");
}

#[tokio::test]
async fn test_update_missing_document_errors() {
    let collection = MemoryCollection::new();
    let result = collection
        .update_one(
            &DocumentLocation::root("nope"),
            &UpdateDocument::new().set("x", json!(1)),
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_document() {
    let collection = MemoryCollection::new();
    collection
        .insert(Document::new("p1", Attributes::new()))
        .await;
    collection
        .delete_one(&DocumentLocation::root("p1"))
        .await
        .unwrap();
    assert!(collection.is_empty().await);
    let result = collection.delete_one(&DocumentLocation::root("p1")).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
