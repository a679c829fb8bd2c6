//! Embedded-document addressing tests.
use super::*;
use crate::document::{Attributes, Document, DocumentLocation};
use serde_json::json;

async fn seed_post_with_comments(collection: &MemoryCollection) {
    let mut attributes = Attributes::new();
    attributes.insert("title".to_string(), json!("First"));
    attributes.insert(
        "comments".to_string(),
        json!([
            { "body": "one" },
            { "body": "two", "replies": [ { "body": "nested" } ] }
        ]),
    );
    collection.insert(Document::new("p1", attributes)).await;
}

#[tokio::test]
async fn test_find_embedded_by_positional_path() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let location = DocumentLocation::embedded("p1", "comments.1");
    let found = collection
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.get("body"), Some(&json!("two")));
}

#[tokio::test]
async fn test_find_deeply_nested() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let location = DocumentLocation::embedded("p1", "comments.1.replies.0");
    let found = collection
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.get("body"), Some(&json!("nested")));
}

#[tokio::test]
async fn test_find_embedded_bad_path_returns_none() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let location = DocumentLocation::embedded("p1", "comments.9");
    let found = collection
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_embedded_applies_at_path() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let location = DocumentLocation::embedded("p1", "comments.0");
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

    let sibling = collection
        .find_one(
            &DocumentLocation::embedded("p1", "comments.1"),
            &FilterSet::unscoped(),
        )
        .await
        .unwrap()
        .unwrap();
    assert!(sibling.get("deleted_at").is_none(), "siblings untouched");
}

#[tokio::test]
async fn test_embedded_filter_applies_to_subdocument() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let location = DocumentLocation::embedded("p1", "comments.0");
    collection
        .update_one(
            &location,
            &UpdateDocument::new().set("deleted_at", json!("2026-08-06T00:00:00+00:00")),
        )
        .await
        .unwrap();
    let active_only = FilterSet::new().with(Condition::null("deleted_at"));
    let found = collection.find_one(&location, &active_only).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_embedded_invalid_path_errors() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let result = collection
        .update_one(
            &DocumentLocation::embedded("p1", "comments.not_an_index"),
            &UpdateDocument::new().set("x", json!(1)),
        )
        .await;
    assert!(matches!(result, Err(StoreError::InvalidPath(_))));
}

#[tokio::test]
async fn test_delete_embedded_removes_array_element() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    collection
        .delete_one(&DocumentLocation::embedded("p1", "comments.0"))
        .await
        .unwrap();
    let remaining = collection
        .find_one(
            &DocumentLocation::embedded("p1", "comments.0"),
            &FilterSet::unscoped(),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.get("body"), Some(&json!("two")), "array shifted down");
}

#[tokio::test]
async fn test_delete_embedded_out_of_bounds_errors() {
    let collection = MemoryCollection::new();
    seed_post_with_comments(&collection).await;
    let result = collection
        .delete_one(&DocumentLocation::embedded("p1", "comments.9"))
        .await;
    assert!(matches!(result, Err(StoreError::InvalidPath(_))));
}
