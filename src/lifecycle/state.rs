use crate::document::Record;
use crate::schema::{Predicate, TypeDefinition};

/// Whether `record` counts as destroyed.
///
/// True when the transient flag is set or the deletion-timestamp field holds a
/// non-null value. The flag is checked first: immediately after an in-process
/// soft delete the attribute may be set in memory while the instance has not
/// yet round-tripped through storage.
#[must_use]
pub fn is_destroyed(definition: &TypeDefinition, record: &Record) -> bool {
    if record.destroyed_flag() {
        return true;
    }
    matches!(record.attribute(definition.field()), Some(value) if !value.is_null())
}

/// Whether `record` has been saved at some point.
///
/// Destroyed state must not affect this: a soft-deleted record is still a
/// legitimate, persisted, updatable document.
#[must_use]
pub fn is_persisted(record: &Record) -> bool {
    !record.is_new()
}

/// Evaluate a named predicate from the type's dispatch table.
///
/// Returns `None` when no predicate with that name is registered. Custom
/// scope predicates (`archived`, ...) resolve to the destroyed-check.
#[must_use]
pub fn evaluate_predicate(
    definition: &TypeDefinition,
    record: &Record,
    name: &str,
) -> Option<bool> {
    match definition.predicate(name) {
        Some(Predicate::Destroyed) => Some(is_destroyed(definition, record)),
        None => None,
    }
}
