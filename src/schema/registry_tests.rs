use super::*;
use crate::config;
use crate::store::{Collection, MemoryCollection};
use std::sync::{Arc, PoisonError};

fn installed_definition(name: &str) -> TypeDefinition {
    let _guard = config::test_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    config::reset();
    let mut definition = TypeDefinition::new(name);
    install(&mut definition);
    definition
}

fn collection() -> Arc<dyn Collection> {
    Arc::new(MemoryCollection::new())
}

#[test]
fn test_register_and_lookup() {
    let mut registry = TypeRegistry::new();
    assert!(registry.is_empty());
    registry.register(installed_definition("posts"), collection());
    registry.register(installed_definition("comments"), collection());

    assert_eq!(registry.len(), 2);
    assert!(registry.get("posts").is_some());
    assert!(registry.collection("posts").is_some());
    assert!(registry.definition("comments").is_some_and(TypeDefinition::is_paranoid));
    assert!(registry.get("ghosts").is_none());

    let mut names = registry.names();
    names.sort();
    assert_eq!(names, vec!["comments", "posts"]);
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut registry = TypeRegistry::new();
    registry.register(installed_definition("posts"), collection());

    let mut replacement = TypeDefinition::new("posts");
    replacement.declare_field(FieldDef::string("body"));
    registry.register(replacement, collection());

    assert_eq!(registry.len(), 1);
    let definition = registry.definition("posts").unwrap();
    assert!(definition.is_paranoid(), "first registration wins");
    assert!(!definition.has_field("body"));
}

#[test]
fn test_definition_mut_allows_setup_changes() {
    let mut registry = TypeRegistry::new();
    registry.register(installed_definition("posts"), collection());
    registry
        .definition_mut("posts")
        .unwrap()
        .declare_field(FieldDef::string("title"));
    assert!(registry.definition("posts").unwrap().has_field("title"));
}
