//! Hard deletion and hook wrapping.
use super::*;
use crate::config;
use crate::document::{Attributes, Document, DocumentLocation, Record};
use crate::hooks::{HookError, LifecycleEvent, Phase};
use crate::query;
use crate::schema::{install, FieldDef, TypeDefinition, TypeRegistry};
use crate::store::{Collection, MemoryCollection};
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

async fn seed_post(collection: &MemoryCollection, id: &str) {
    let mut attributes = Attributes::new();
    attributes.insert("title".to_string(), json!("Post"));
    collection.insert(Document::new(id, attributes)).await;
}

async fn load(registry: &TypeRegistry, id: &str) -> Record {
    query::find_unscoped(registry, "posts", &DocumentLocation::root(id))
        .await
        .unwrap()
        .unwrap()
}

fn order_log() -> Arc<Mutex<Vec<&'static str>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn register_logging_hook(
    registry: &mut TypeRegistry,
    phase: Phase,
    event: LifecycleEvent,
    log: &Arc<Mutex<Vec<&'static str>>>,
    label: &'static str,
) {
    let log = Arc::clone(log);
    registry
        .definition_mut("posts")
        .unwrap()
        .hooks_mut()
        .register(phase, event, move |_record| {
            log.lock().unwrap().push(label);
            Ok(())
        });
}

#[tokio::test]
async fn test_hard_delete_removes_from_every_query() {
    let (registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    let mut record = load(&registry, "p1").await;

    hard_delete(&registry, &mut record).await.unwrap();

    assert!(record.destroyed_flag());
    assert!(query::all(&registry, "posts").await.unwrap().is_empty());
    assert!(query::scoped(&registry, "posts", "deleted")
        .await
        .unwrap()
        .is_empty());
    assert!(query::find_unscoped(&registry, "posts", &DocumentLocation::root("p1"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_hard_delete_reaches_soft_deleted_records() {
    let (registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    let mut record = load(&registry, "p1").await;
    soft_remove(&registry, &crate::associations::NullResolver, &mut record)
        .await
        .unwrap();

    // The record is hidden from default queries but must still be deletable.
    let mut hidden = load(&registry, "p1").await;
    hard_delete(&registry, &mut hidden).await.unwrap();
    assert!(collection.is_empty().await);
}

#[tokio::test]
async fn test_hard_delete_hook_nesting() {
    let (mut registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    let log = order_log();
    register_logging_hook(&mut registry, Phase::Pre, LifecycleEvent::Destroy, &log, "pre-destroy");
    register_logging_hook(&mut registry, Phase::Pre, LifecycleEvent::Remove, &log, "pre-remove");
    register_logging_hook(&mut registry, Phase::Post, LifecycleEvent::Remove, &log, "post-remove");
    register_logging_hook(&mut registry, Phase::Post, LifecycleEvent::Destroy, &log, "post-destroy");

    let mut record = load(&registry, "p1").await;
    hard_delete(&registry, &mut record).await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["pre-destroy", "pre-remove", "post-remove", "post-destroy"]
    );
}

#[tokio::test]
async fn test_soft_remove_runs_only_remove_hooks() {
    let (mut registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    let log = order_log();
    register_logging_hook(&mut registry, Phase::Pre, LifecycleEvent::Remove, &log, "pre-remove");
    register_logging_hook(&mut registry, Phase::Post, LifecycleEvent::Remove, &log, "post-remove");
    register_logging_hook(&mut registry, Phase::Pre, LifecycleEvent::Destroy, &log, "pre-destroy");

    let mut record = load(&registry, "p1").await;
    soft_remove(&registry, &crate::associations::NullResolver, &mut record)
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["pre-remove", "post-remove"]);
}

#[tokio::test]
async fn test_restore_runs_restore_hooks() {
    let (mut registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    let log = order_log();
    register_logging_hook(&mut registry, Phase::Pre, LifecycleEvent::Restore, &log, "pre-restore");
    register_logging_hook(&mut registry, Phase::Post, LifecycleEvent::Restore, &log, "post-restore");

    let mut record = load(&registry, "p1").await;
    soft_remove(&registry, &crate::associations::NullResolver, &mut record)
        .await
        .unwrap();
    restore(
        &registry,
        &crate::associations::NullResolver,
        &mut record,
        RestoreOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["pre-restore", "post-restore"]);
}

#[tokio::test]
async fn test_failing_pre_remove_hook_aborts_soft_remove() {
    let (mut registry, collection) = post_registry();
    seed_post(&collection, "p1").await;
    registry
        .definition_mut("posts")
        .unwrap()
        .hooks_mut()
        .register(Phase::Pre, LifecycleEvent::Remove, |_record| {
            Err(HookError::aborted("removal vetoed"))
        });

    let mut record = load(&registry, "p1").await;
    let result = soft_remove(&registry, &crate::associations::NullResolver, &mut record).await;
    assert!(matches!(result, Err(LifecycleError::Hook(_))));

    // Nothing was written: the record is still active everywhere.
    let definition = registry.definition("posts").unwrap();
    assert!(!is_destroyed(definition, &record));
    assert_eq!(query::all(&registry, "posts").await.unwrap().len(), 1);
}
