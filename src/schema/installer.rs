//! Per-type setup wiring paranoia configuration into a record type.
//!
//! Runs once at type-definition time. The definition takes a private copy of
//! the then-current global configuration, so later global changes do not
//! affect already-defined types.

use super::types::{FieldDef, Predicate, ScopeField, TypeDefinition};
use crate::config;
use crate::config::{ParanoiaConfig, DEFAULT_FIELD, DEFAULT_SCOPE};
use crate::store::Condition;
use tracing::debug;

/// Name of the predicate every paranoid type exposes.
pub(super) const DESTROYED_PREDICATE: &str = "destroyed";

/// Install soft-delete behavior on a record type.
///
/// Snapshots the global configuration, declares the deletion-timestamp field,
/// marks the type paranoid, installs the default filter (`field IS NULL`) and
/// the default-named deletion scope (`field IS NOT NULL`), and registers the
/// `destroyed` predicate. The deletion scope is bound to the default scope
/// name regardless of later per-type overrides. The `remove` and `restore`
/// hook points are available on every definition through
/// [`TypeDefinition::hooks_mut`].
pub fn install(definition: &mut TypeDefinition) {
    definition.config = config::get();
    let field = definition.config.field.clone();
    definition.declare_field(FieldDef::timestamp(field.clone()));
    definition.paranoid = true;
    definition.push_default_filter(Condition::null(field.clone()));
    definition.insert_scope(DEFAULT_SCOPE, ScopeField::Paranoid);
    definition.insert_predicate(DESTROYED_PREDICATE, Predicate::Destroyed);
    debug!(
        type_name = %definition.name,
        field = %field,
        scope = %definition.config.scope,
        "Installed soft-delete behavior"
    );
}

/// Override this type's deletion-timestamp field name.
///
/// Never derives the scope name. Idempotent and re-entrant.
pub fn set_custom_field(definition: &mut TypeDefinition, name: &str) {
    definition.config.field = name.to_string();
    rerun_setup(definition);
}

/// Override this type's deletion-scope name.
///
/// When the field name is still the global default, the field is derived as
/// `<name>_at`. Idempotent and re-entrant.
pub fn set_custom_scope(definition: &mut TypeDefinition, name: &str) {
    definition.config.scope = name.to_string();
    if definition.config.field == DEFAULT_FIELD {
        definition.config.field = ParanoiaConfig::derived_field_name(name);
    }
    rerun_setup(definition);
}

/// Re-run setup after an override.
///
/// A custom field gets an additional default filter and a predicate named
/// after the current scope, aliased to the destroyed-check. A custom scope
/// gets an additional named scope pinned to the custom field. The
/// default-named scope and filter installed by [`install`] are left in place,
/// so both coexist on overridden types.
fn rerun_setup(definition: &mut TypeDefinition) {
    let field = definition.config.field.clone();
    let scope = definition.config.scope.clone();
    definition.declare_field(FieldDef::timestamp(field.clone()));
    if field != DEFAULT_FIELD {
        definition.push_default_filter(Condition::null(field.clone()));
        definition.insert_predicate(&scope, Predicate::Destroyed);
    }
    if scope != DEFAULT_SCOPE {
        definition.insert_scope(&scope, ScopeField::Named(field.clone()));
    }
    debug!(
        type_name = %definition.name,
        field = %field,
        scope = %scope,
        "Applied per-type paranoia override"
    );
}
