use super::error::LifecycleError;
use super::state::is_destroyed;
use crate::associations::{AssociationResolver, Dependent};
use crate::document::Record;
use crate::hooks::{LifecycleEvent, Phase};
use crate::schema::TypeRegistry;
use crate::store::UpdateDocument;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::info;

/// Options for [`restore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Also restore destroy-marked dependents, recursively.
    pub recursive: bool,
}

impl RestoreOptions {
    /// Options with recursion enabled.
    #[must_use]
    pub fn recursive() -> Self {
        Self { recursive: true }
    }
}

/// Restore a soft-deleted record.
///
/// Issues an update that removes (not merely nulls) the deletion-timestamp
/// field from storage, drops the attribute from the in-memory map, and clears
/// the transient destroyed flag, all wrapped in `restore` hooks. With
/// `recursive` options, destroy-marked dependents that are paranoid-capable
/// and currently destroyed are restored with the same options.
///
/// Restoration failures of individual dependents do not roll back the parent;
/// the error propagates from the point of failure and remaining dependents
/// are not visited.
pub fn restore<'a>(
    registry: &'a TypeRegistry,
    resolver: &'a dyn AssociationResolver,
    record: &'a mut Record,
    options: RestoreOptions,
) -> BoxFuture<'a, Result<(), LifecycleError>> {
    async move {
        let registered = registry
            .get(record.type_name())
            .ok_or_else(|| LifecycleError::UnknownType(record.type_name().to_string()))?;
        let definition = &registered.definition;

        definition
            .hooks()
            .run(Phase::Pre, LifecycleEvent::Restore, record)?;

        let field = definition.field().to_string();
        registered
            .collection
            .update_one(record.location(), &UpdateDocument::new().unset(field.clone()))
            .await?;
        record.remove_attribute(&field);
        record.clear_destroyed();

        if options.recursive {
            for association in definition.associations() {
                if association.dependent != Dependent::Destroy {
                    continue;
                }
                let dependents = resolver.dependents(registry, record, association).await?;
                for mut dependent in dependents {
                    let Some(target) = registry.definition(&association.target_type) else {
                        continue;
                    };
                    if target.is_paranoid() && is_destroyed(target, &dependent) {
                        restore(registry, resolver, &mut dependent, options).await?;
                    }
                }
            }
        }

        definition
            .hooks()
            .run(Phase::Post, LifecycleEvent::Restore, record)?;
        info!(
            type_name = %record.type_name(),
            id = %record.id(),
            recursive = options.recursive,
            "Restored record"
        );
        Ok(())
    }
    .boxed()
}
