//! Soft removal and destroyed-state checks.
use super::*;
use crate::associations::{AssociationDef, AssociationResolver, NullResolver};
use crate::config;
use crate::document::{Attributes, Document, DocumentLocation, Record};
use crate::query;
use crate::schema::{install, FieldDef, TypeDefinition, TypeRegistry};
use crate::store::{Collection, FilterSet, MemoryCollection, StoreError, UpdateDocument};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};

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

fn post_registry() -> (TypeRegistry, Arc<MemoryCollection>) {
    let collection = Arc::new(MemoryCollection::new());
    let mut registry = TypeRegistry::new();
    registry.register(
        installed_definition("posts"),
        collection.clone(),
    );
    (registry, collection)
}

async fn seed_post(collection: &MemoryCollection, id: &str, title: &str) {
    let mut attributes = Attributes::new();
    attributes.insert("title".to_string(), json!(title));
    collection.insert(Document::new(id, attributes)).await;
}

async fn load(registry: &TypeRegistry, id: &str) -> Record {
    query::find(registry, "posts", &DocumentLocation::root(id))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn test_soft_remove_marks_destroyed_and_stamps_field() {
    let (registry, collection) = post_registry();
    seed_post(&collection, "p1", "First").await;
    let mut record = load(&registry, "p1").await;
    let definition = registry.definition("posts").unwrap();
    assert!(!is_destroyed(definition, &record));

    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();

    assert!(is_destroyed(definition, &record));
    assert!(record.destroyed_flag());
    let stamp = record
        .attribute("deleted_at")
        .and_then(|v| v.as_str())
        .expect("deletion timestamp should be set in memory");
    let parsed = chrono::DateTime::parse_from_rfc3339(stamp).unwrap();
    let age = chrono::Utc::now().signed_duration_since(parsed);
    assert!(age.num_seconds() < 5, "timestamp should be recent");

    let stored = collection
        .find_one(record.location(), &FilterSet::unscoped())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get("deleted_at"), Some(&json!(stamp)));
    assert_eq!(stored.get("title"), Some(&json!("First")), "no other fields touched");
}

#[tokio::test]
async fn test_soft_removed_records_leave_default_queries() {
    let (registry, collection) = post_registry();
    seed_post(&collection, "a", "Keep").await;
    seed_post(&collection, "b", "Drop").await;
    let mut record = load(&registry, "b").await;
    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();

    let active = query::all(&registry, "posts").await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), &json!("a"));

    let deleted = query::scoped(&registry, "posts", "deleted").await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id(), &json!("b"));
}

#[tokio::test]
async fn test_destroyed_check_falls_back_to_field() {
    let (registry, _collection) = post_registry();
    let definition = registry.definition("posts").unwrap();
    let mut attributes = Attributes::new();
    attributes.insert(
        "deleted_at".to_string(),
        json!("2026-08-06T00:00:00+00:00"),
    );
    let hydrated = Record::hydrated("posts", DocumentLocation::root("x"), attributes);
    assert!(!hydrated.destroyed_flag());
    assert!(is_destroyed(definition, &hydrated), "field alone must count");
}

#[tokio::test]
async fn test_persisted_unaffected_by_destroyed_state() {
    let (registry, collection) = post_registry();
    seed_post(&collection, "p1", "First").await;
    let mut record = load(&registry, "p1").await;
    assert!(is_persisted(&record));
    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();
    assert!(is_persisted(&record), "soft-deleted records stay persisted");

    let unsaved = Record::new("posts", DocumentLocation::root("fresh"));
    assert!(!is_persisted(&unsaved));
}

#[tokio::test]
async fn test_soft_remove_unknown_type_errors() {
    let registry = TypeRegistry::new();
    let mut record = Record::new("ghosts", DocumentLocation::root("g1"));
    let result = soft_remove(&registry, &NullResolver, &mut record).await;
    assert!(matches!(result, Err(LifecycleError::UnknownType(_))));
}

/// Collection wrapper capturing every partial update issued through it.
struct RecordingCollection {
    inner: MemoryCollection,
    updates: Mutex<Vec<UpdateDocument>>,
}

impl RecordingCollection {
    fn new() -> Self {
        Self {
            inner: MemoryCollection::new(),
            updates: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Collection for RecordingCollection {
    async fn find_one(
        &self,
        location: &DocumentLocation,
        filter: &FilterSet,
    ) -> Result<Option<Attributes>, StoreError> {
        self.inner.find_one(location, filter).await
    }

    async fn list(&self, filter: &FilterSet) -> Result<Vec<Document>, StoreError> {
        self.inner.list(filter).await
    }

    async fn update_one(
        &self,
        location: &DocumentLocation,
        update: &UpdateDocument,
    ) -> Result<(), StoreError> {
        self.updates.lock().unwrap().push(update.clone());
        self.inner.update_one(location, update).await
    }

    async fn delete_one(&self, location: &DocumentLocation) -> Result<(), StoreError> {
        self.inner.delete_one(location).await
    }
}

#[tokio::test]
async fn test_soft_remove_issues_exactly_one_targeted_update() {
    let collection = Arc::new(RecordingCollection::new());
    seed_post(&collection.inner, "p1", "First").await;
    let mut registry = TypeRegistry::new();
    registry.register(
        installed_definition("posts"),
        collection.clone(),
    );
    let mut record = load(&registry, "p1").await;
    soft_remove(&registry, &NullResolver, &mut record)
        .await
        .unwrap();

    let updates = collection.updates.lock().unwrap();
    assert_eq!(updates.len(), 1, "exactly one update must be issued");
    assert_eq!(updates[0].sets().len(), 1);
    assert!(updates[0].sets().contains_key("deleted_at"));
    assert!(updates[0].unsets().is_empty());
}

/// Resolver recording whether the parent looked destroyed while cascading.
struct CascadeProbe {
    parent_destroyed_during_cascade: Mutex<Vec<bool>>,
}

#[async_trait]
impl AssociationResolver for CascadeProbe {
    async fn cascade_remove(
        &self,
        registry: &TypeRegistry,
        parent: &Record,
        _association: &AssociationDef,
    ) -> Result<(), StoreError> {
        let definition = registry.definition(parent.type_name()).unwrap();
        self.parent_destroyed_during_cascade
            .lock()
            .unwrap()
            .push(is_destroyed(definition, parent));
        Ok(())
    }

    async fn dependents(
        &self,
        _registry: &TypeRegistry,
        _parent: &Record,
        _association: &AssociationDef,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_cascade_runs_before_field_is_set() {
    let collection = Arc::new(MemoryCollection::new());
    seed_post(&collection, "p1", "First").await;
    let mut definition = installed_definition("posts");
    definition.associate(
        AssociationDef::new("comments", "comments", "post_id").dependent_destroy(),
    );
    let mut registry = TypeRegistry::new();
    registry.register(definition, collection.clone());

    let probe = CascadeProbe {
        parent_destroyed_during_cascade: Mutex::new(Vec::new()),
    };
    let mut record = load(&registry, "p1").await;
    soft_remove(&registry, &probe, &mut record).await.unwrap();

    let observed = probe.parent_destroyed_during_cascade.lock().unwrap();
    assert_eq!(*observed, vec![false], "dependents must see an active parent");
    let definition = registry.definition("posts").unwrap();
    assert!(is_destroyed(definition, &record), "parent destroyed afterwards");
}
