use super::error::LifecycleError;
use crate::associations::{AssociationResolver, Dependent};
use crate::document::Record;
use crate::hooks::{LifecycleEvent, Phase};
use crate::schema::TypeRegistry;
use crate::store::UpdateDocument;
use crate::utils::now_iso;
use serde_json::Value;
use tracing::info;

/// Soft-delete a record by setting its deletion timestamp.
///
/// Cascades to destroy-marked associations first, so dependents still see an
/// active parent while cascading. Then stamps the current time into the
/// record, issues exactly one targeted field update to storage, and sets the
/// transient destroyed flag. `remove` hooks wrap the whole sequence. No
/// business validation blocks a soft delete; only storage or hook failures
/// propagate.
pub async fn soft_remove(
    registry: &TypeRegistry,
    resolver: &dyn AssociationResolver,
    record: &mut Record,
) -> Result<(), LifecycleError> {
    let registered = registry
        .get(record.type_name())
        .ok_or_else(|| LifecycleError::UnknownType(record.type_name().to_string()))?;
    let definition = &registered.definition;

    definition
        .hooks()
        .run(Phase::Pre, LifecycleEvent::Remove, record)?;

    for association in definition.associations() {
        if association.dependent == Dependent::Destroy {
            resolver.cascade_remove(registry, record, association).await?;
        }
    }

    let stamp = now_iso();
    let field = definition.field().to_string();
    record.set_attribute(field.as_str(), Value::String(stamp.clone()));
    registered
        .collection
        .update_one(record.location(), &UpdateDocument::new().set(field, stamp))
        .await?;
    record.mark_destroyed();

    definition
        .hooks()
        .run(Phase::Post, LifecycleEvent::Remove, record)?;
    info!(
        type_name = %record.type_name(),
        id = %record.id(),
        "Soft-deleted record"
    );
    Ok(())
}
