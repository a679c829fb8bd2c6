//! Per-type override behavior.
use super::*;
use crate::config;
use crate::store::{Condition, FilterSet};
use std::sync::PoisonError;

fn installed_definition(name: &str) -> TypeDefinition {
    let _guard = config::test_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    config::reset();
    let mut definition = TypeDefinition::new(name);
    install(&mut definition);
    definition
}

#[test]
fn test_custom_scope_derives_field_name() {
    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");

    assert_eq!(definition.scope_name(), "archived");
    assert_eq!(definition.field(), "archived_at");
    assert!(definition.has_field("archived_at"));
}

#[test]
fn test_custom_scope_exposes_both_scopes() {
    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");

    // Both the legacy scope and the custom one resolve against the field
    // governing this type.
    let expected = FilterSet::new().with(Condition::not_null("archived_at"));
    assert_eq!(definition.scope("deleted"), Some(expected.clone()));
    assert_eq!(definition.scope("archived"), Some(expected));
    assert_eq!(definition.scope_names(), vec!["deleted", "archived"]);
}

#[test]
fn test_custom_scope_exposes_both_predicates() {
    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");

    assert_eq!(definition.predicate("destroyed"), Some(Predicate::Destroyed));
    assert_eq!(definition.predicate("archived"), Some(Predicate::Destroyed));
}

#[test]
fn test_custom_scope_layers_default_filters() {
    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");

    let filter = definition.default_filter();
    assert_eq!(
        filter.conditions(),
        [Condition::null("deleted_at"), Condition::null("archived_at")]
    );
}

#[test]
fn test_custom_field_never_derives_scope() {
    let mut definition = installed_definition("posts");
    set_custom_field(&mut definition, "removed_on");

    assert_eq!(definition.field(), "removed_on");
    assert_eq!(definition.scope_name(), "deleted");
    // The predicate aliased for the custom field carries the scope name.
    assert_eq!(definition.predicate("deleted"), Some(Predicate::Destroyed));
    assert_eq!(
        definition.scope("deleted"),
        Some(FilterSet::new().with(Condition::not_null("removed_on")))
    );
}

#[test]
fn test_custom_field_blocks_later_derivation() {
    let mut definition = installed_definition("posts");
    set_custom_field(&mut definition, "removed_on");
    set_custom_scope(&mut definition, "archived");

    // Field already overridden, so the scope override must not re-derive it.
    assert_eq!(definition.field(), "removed_on");
    assert_eq!(definition.scope_name(), "archived");
    assert_eq!(
        definition.scope("archived"),
        Some(FilterSet::new().with(Condition::not_null("removed_on")))
    );
}

#[test]
fn test_predicates_dispatch_to_destroyed_check() {
    use crate::document::{DocumentLocation, Record};
    use crate::lifecycle::evaluate_predicate;
    use serde_json::json;

    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");

    let mut record = Record::new("posts", DocumentLocation::root("p1"));
    assert_eq!(evaluate_predicate(&definition, &record, "archived"), Some(false));
    assert_eq!(evaluate_predicate(&definition, &record, "destroyed"), Some(false));
    assert_eq!(evaluate_predicate(&definition, &record, "missing"), None);

    record.set_attribute("archived_at", json!("2026-08-06T00:00:00+00:00"));
    assert_eq!(evaluate_predicate(&definition, &record, "archived"), Some(true));
    assert_eq!(evaluate_predicate(&definition, &record, "destroyed"), Some(true));
}

#[test]
fn test_overrides_are_idempotent() {
    let mut definition = installed_definition("posts");
    set_custom_scope(&mut definition, "archived");
    set_custom_scope(&mut definition, "archived");

    assert_eq!(definition.scope_names(), vec!["deleted", "archived"]);
    assert_eq!(definition.default_filter().conditions().len(), 2);
    assert_eq!(definition.fields().len(), 2);
}
