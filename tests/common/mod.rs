//! Common test utilities

use softstore::{
    install, AssociationDef, Attributes, Collection, Document, DocumentLocation, FieldDef,
    MemoryCollection, Record, TypeDefinition, TypeRegistry,
};
use serde_json::Value;
use std::sync::Arc;

/// Initialize tracing once for the test binary; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Build a blog-shaped registry: `posts` with destroy-marked `comments`.
pub fn blog_registry() -> (TypeRegistry, Arc<MemoryCollection>, Arc<MemoryCollection>) {
    let posts = Arc::new(MemoryCollection::new());
    let comments = Arc::new(MemoryCollection::new());
    let mut registry = TypeRegistry::new();

    let mut post_definition = TypeDefinition::new("posts");
    post_definition.declare_field(FieldDef::string("title"));
    install(&mut post_definition);
    post_definition.associate(
        AssociationDef::new("comments", "comments", "post_id").dependent_destroy(),
    );
    let posts_dyn: Arc<dyn Collection> = posts.clone();
    registry.register(post_definition, posts_dyn);

    let mut comment_definition = TypeDefinition::new("comments");
    install(&mut comment_definition);
    let comments_dyn: Arc<dyn Collection> = comments.clone();
    registry.register(comment_definition, comments_dyn);

    (registry, posts, comments)
}

/// Insert a document built from key/value pairs.
pub async fn seed(collection: &MemoryCollection, id: &str, pairs: &[(&str, Value)]) {
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        attributes.insert((*key).to_string(), value.clone());
    }
    collection.insert(Document::new(id, attributes)).await;
}

/// Load a record by id, bypassing default scoping.
#[allow(dead_code)] // Test utility for integration tests
pub async fn load(registry: &TypeRegistry, type_name: &str, id: &str) -> Record {
    softstore::query::find_unscoped(registry, type_name, &DocumentLocation::root(id))
        .await
        .expect("query should succeed")
        .expect("record should exist")
}
