//! Restore behavior, including recursion and embedded records.
use super::*;
use crate::associations::{AssociationDef, ForeignKeyResolver, NullResolver};
use crate::config;
use crate::document::{Attributes, Document, DocumentLocation, Record};
use crate::query;
use crate::schema::{install, FieldDef, TypeDefinition, TypeRegistry};
use crate::store::{Collection, FilterSet, MemoryCollection};
use serde_json::json;
use std::sync::{Arc, PoisonError};

fn installed_definition(name: &str) -> TypeDefinition {
    let _guard = config::test_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    config::reset();
    let mut definition = TypeDefinition::new(name);
    definition.declare_field(FieldDef::string("title"));
    install(&mut definition);
    definition
}

/// Blog fixture: posts with destroy-marked comments, each in its own
/// collection.
fn blog_registry() -> (TypeRegistry, Arc<MemoryCollection>, Arc<MemoryCollection>) {
    let posts = Arc::new(MemoryCollection::new());
    let comments = Arc::new(MemoryCollection::new());
    let mut registry = TypeRegistry::new();
    let mut post_definition = installed_definition("posts");
    post_definition.associate(
        AssociationDef::new("comments", "comments", "post_id").dependent_destroy(),
    );
    registry.register(post_definition, posts.clone());
    registry.register(
        installed_definition("comments"),
        comments.clone(),
    );
    (registry, posts, comments)
}

async fn seed(collection: &MemoryCollection, id: &str, pairs: &[(&str, serde_json::Value)]) {
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        attributes.insert((*key).to_string(), value.clone());
    }
    collection.insert(Document::new(id, attributes)).await;
}

async fn load(registry: &TypeRegistry, type_name: &str, id: &str) -> Record {
    query::find_unscoped(registry, type_name, &DocumentLocation::root(id))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn test_restore_clears_field_and_flag() {
    let (registry, posts, _comments) = blog_registry();
    seed(&posts, "p1", &[("title", json!("First"))]).await;
    let mut record = load(&registry, "posts", "p1").await;
    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();

    restore(&registry, &NullResolver, &mut record, RestoreOptions::default())
        .await
        .unwrap();

    let definition = registry.definition("posts").unwrap();
    assert!(!is_destroyed(definition, &record));
    assert!(!record.destroyed_flag());
    assert_eq!(
        record.attribute("deleted_at"),
        None,
        "the attribute must be absent, not merely null"
    );
    let stored = posts
        .find_one(record.location(), &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.contains_key("deleted_at"), "field removed from storage");

    let active = query::all(&registry, "posts").await.unwrap();
    assert_eq!(active.len(), 1, "restored records rejoin default queries");
}

#[tokio::test]
async fn test_restore_is_idempotent() {
    let (registry, posts, _comments) = blog_registry();
    seed(&posts, "p1", &[("title", json!("First"))]).await;
    let mut record = load(&registry, "posts", "p1").await;
    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();

    restore(&registry, &NullResolver, &mut record, RestoreOptions::default())
        .await
        .unwrap();
    let after_first = record.clone();
    restore(&registry, &NullResolver, &mut record, RestoreOptions::default())
        .await
        .unwrap();

    assert_eq!(record, after_first);
    let definition = registry.definition("posts").unwrap();
    assert!(!is_destroyed(definition, &record));
    assert_eq!(record.attribute("deleted_at"), None);
}

#[tokio::test]
async fn test_recursive_restore_revives_dependents() {
    let (registry, posts, comments) = blog_registry();
    seed(&posts, "p1", &[("title", json!("First"))]).await;
    seed(&comments, "c1", &[("post_id", json!("p1"))]).await;

    let mut parent = load(&registry, "posts", "p1").await;
    soft_remove(&registry, &ForeignKeyResolver, &mut parent)
        .await
        .unwrap();

    let child = load(&registry, "comments", "c1").await;
    let comment_definition = registry.definition("comments").unwrap();
    assert!(
        is_destroyed(comment_definition, &child),
        "cascade should have removed the dependent"
    );

    restore(
        &registry,
        &ForeignKeyResolver,
        &mut parent,
        RestoreOptions::recursive(),
    )
    .await
    .unwrap();

    let post_definition = registry.definition("posts").unwrap();
    assert!(!is_destroyed(post_definition, &parent));
    let child = load(&registry, "comments", "c1").await;
    assert!(!is_destroyed(comment_definition, &child));
}

#[tokio::test]
async fn test_non_recursive_restore_leaves_dependents_deleted() {
    let (registry, posts, comments) = blog_registry();
    seed(&posts, "p1", &[("title", json!("First"))]).await;
    seed(&comments, "c1", &[("post_id", json!("p1"))]).await;

    let mut parent = load(&registry, "posts", "p1").await;
    soft_remove(&registry, &ForeignKeyResolver, &mut parent)
        .await
        .unwrap();
    restore(
        &registry,
        &ForeignKeyResolver,
        &mut parent,
        RestoreOptions::default(),
    )
    .await
    .unwrap();

    let child = load(&registry, "comments", "c1").await;
    let comment_definition = registry.definition("comments").unwrap();
    assert!(is_destroyed(comment_definition, &child));
}

#[tokio::test]
async fn test_soft_remove_and_restore_embedded_record() {
    let (registry, posts, _comments) = blog_registry();
    let mut attributes = Attributes::new();
    attributes.insert("title".to_string(), json!("First"));
    attributes.insert("reviews".to_string(), json!([{ "body": "embedded" }]));
    posts.insert(Document::new("p1", attributes)).await;

    // Embedded records live in their root aggregate's collection and are
    // addressed by positional path.
    let location = DocumentLocation::embedded("p1", "reviews.0");
    let mut embedded = query::find_unscoped(&registry, "posts", &location)
        .await
        .unwrap()
        .unwrap();

    soft_remove(&registry, &NullResolver, &mut embedded)
        .await
        .unwrap();
    let stored = posts
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.get("deleted_at").is_some());

    restore(
        &registry,
        &NullResolver,
        &mut embedded,
        RestoreOptions::default(),
    )
    .await
    .unwrap();
    let stored = posts
        .find_one(&location, &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.contains_key("deleted_at"));
    assert_eq!(stored.get("body"), Some(&json!("embedded")));
}
