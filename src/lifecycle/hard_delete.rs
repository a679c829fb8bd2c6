use super::error::LifecycleError;
use crate::document::Record;
use crate::hooks::{LifecycleEvent, Phase};
use crate::schema::TypeRegistry;
use tracing::info;

/// Physically delete a record, bypassing the soft path entirely.
///
/// Operates on the collection with scoping removed, so soft-deleted records
/// the default filter hides are still deletable. `destroy` hooks wrap the
/// operation with `remove` hooks nested inside: a hard delete must satisfy
/// the remove contract without performing the soft path.
pub async fn hard_delete(
    registry: &TypeRegistry,
    record: &mut Record,
) -> Result<(), LifecycleError> {
    let registered = registry
        .get(record.type_name())
        .ok_or_else(|| LifecycleError::UnknownType(record.type_name().to_string()))?;
    let definition = &registered.definition;

    definition
        .hooks()
        .run(Phase::Pre, LifecycleEvent::Destroy, record)?;
    definition
        .hooks()
        .run(Phase::Pre, LifecycleEvent::Remove, record)?;

    registered.collection.delete_one(record.location()).await?;
    record.mark_destroyed();

    definition
        .hooks()
        .run(Phase::Post, LifecycleEvent::Remove, record)?;
    definition
        .hooks()
        .run(Phase::Post, LifecycleEvent::Destroy, record)?;
    info!(
        type_name = %record.type_name(),
        id = %record.id(),
        "Hard-deleted record"
    );
    Ok(())
}
