//! Default installation behavior.
use super::*;
use crate::config;
use crate::store::{Condition, FilterSet};
use std::sync::PoisonError;

fn config_guard() -> std::sync::MutexGuard<'static, ()> {
    config::test_lock()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_install_defaults() {
    let _guard = config_guard();
    config::reset();
    let mut definition = TypeDefinition::new("posts");
    assert!(!definition.is_paranoid());
    install(&mut definition);

    assert!(definition.is_paranoid());
    assert_eq!(definition.field(), "deleted_at");
    assert_eq!(definition.scope_name(), "deleted");
    assert!(definition.has_field("deleted_at"));
    assert_eq!(
        definition.fields().first().map(|f| f.kind),
        Some(FieldKind::Timestamp)
    );
    assert_eq!(
        definition.default_filter(),
        FilterSet::new().with(Condition::null("deleted_at"))
    );
    assert_eq!(
        definition.scope("deleted"),
        Some(FilterSet::new().with(Condition::not_null("deleted_at")))
    );
    assert_eq!(definition.predicate("destroyed"), Some(Predicate::Destroyed));
    assert_eq!(definition.predicate("archived"), None);
}

#[test]
fn test_install_is_idempotent() {
    let _guard = config_guard();
    config::reset();
    let mut definition = TypeDefinition::new("posts");
    install(&mut definition);
    install(&mut definition);

    assert_eq!(definition.fields().len(), 1);
    assert_eq!(definition.default_filter().conditions().len(), 1);
    assert_eq!(definition.scope_names(), vec!["deleted"]);
}

#[test]
fn test_install_reads_current_global_config() {
    let _guard = config_guard();
    config::reset();
    config::configure(|c| {
        c.field = "removed_on".to_string();
        c.scope = "removed".to_string();
    });
    let mut definition = TypeDefinition::new("posts");
    install(&mut definition);
    config::reset();

    assert_eq!(definition.field(), "removed_on");
    assert_eq!(definition.scope_name(), "removed");
    assert!(definition.has_field("removed_on"));
    // The deletion scope keeps its default name even under a custom config.
    assert_eq!(
        definition.scope("deleted"),
        Some(FilterSet::new().with(Condition::not_null("removed_on")))
    );
}

#[test]
fn test_snapshot_decouples_from_later_global_changes() {
    let _guard = config_guard();
    config::reset();
    let mut first = TypeDefinition::new("posts");
    install(&mut first);

    config::configure(|c| c.field = "gone_at".to_string());
    let mut second = TypeDefinition::new("comments");
    install(&mut second);
    config::reset();

    assert_eq!(first.field(), "deleted_at");
    assert_eq!(second.field(), "gone_at");
}

#[test]
fn test_keeps_previously_declared_fields() {
    let _guard = config_guard();
    config::reset();
    let mut definition = TypeDefinition::new("posts");
    definition.declare_field(FieldDef::string("title"));
    install(&mut definition);

    assert!(definition.has_field("title"));
    assert!(definition.has_field("deleted_at"));
    assert_eq!(definition.fields().len(), 2);
}
