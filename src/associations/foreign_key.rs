use super::resolver::AssociationResolver;
use super::types::{AssociationDef, Dependent};
use crate::document::{DocumentLocation, Record};
use crate::lifecycle::is_destroyed;
use crate::schema::TypeRegistry;
use crate::store::{FilterSet, StoreError, UpdateDocument};
use crate::utils::now_iso;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

/// Resolver matching dependents by foreign-key equality against the parent's
/// root id.
///
/// Removal is propagated transitively: each destroyed dependent's own
/// destroy-marked associations are cascaded too, all sharing one timestamp.
/// Dependents whose type is not paranoid-capable are physically deleted.
/// Propagation sets timestamps directly against the collections; dependent
/// hooks are not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForeignKeyResolver;

async fn load_dependents(
    registry: &TypeRegistry,
    parent: &Record,
    association: &AssociationDef,
) -> Result<Vec<Record>, StoreError> {
    let registered = registry.get(&association.target_type).ok_or_else(|| {
        StoreError::not_found(format!("record type {}", association.target_type))
    })?;
    let documents = registered.collection.list(&FilterSet::unscoped()).await?;
    Ok(documents
        .into_iter()
        .filter(|d| d.attributes.get(&association.foreign_key) == Some(parent.id()))
        .map(|d| {
            Record::hydrated(
                association.target_type.clone(),
                DocumentLocation::root(d.id),
                d.attributes,
            )
        })
        .collect())
}

fn propagate<'a>(
    registry: &'a TypeRegistry,
    parent: &'a Record,
    association: &'a AssociationDef,
    stamp: &'a str,
) -> BoxFuture<'a, Result<(), StoreError>> {
    async move {
        if association.dependent != Dependent::Destroy {
            return Ok(());
        }
        let registered = registry.get(&association.target_type).ok_or_else(|| {
            StoreError::not_found(format!("record type {}", association.target_type))
        })?;
        let definition = &registered.definition;
        let dependents = load_dependents(registry, parent, association).await?;
        for mut dependent in dependents {
            if definition.is_paranoid() {
                if is_destroyed(definition, &dependent) {
                    continue;
                }
                registered
                    .collection
                    .update_one(
                        dependent.location(),
                        &UpdateDocument::new().set(definition.field(), stamp),
                    )
                    .await?;
                dependent.set_attribute(definition.field(), stamp);
                debug!(
                    type_name = %association.target_type,
                    id = %dependent.id(),
                    "Cascaded removal to dependent"
                );
                for nested in definition.associations() {
                    propagate(registry, &dependent, nested, stamp).await?;
                }
            } else {
                registered.collection.delete_one(dependent.location()).await?;
                debug!(
                    type_name = %association.target_type,
                    id = %dependent.id(),
                    "Cascade deleted non-paranoid dependent"
                );
            }
        }
        Ok(())
    }
    .boxed()
}

#[async_trait]
impl AssociationResolver for ForeignKeyResolver {
    async fn cascade_remove(
        &self,
        registry: &TypeRegistry,
        parent: &Record,
        association: &AssociationDef,
    ) -> Result<(), StoreError> {
        let stamp = now_iso();
        propagate(registry, parent, association, &stamp).await
    }

    async fn dependents(
        &self,
        registry: &TypeRegistry,
        parent: &Record,
        association: &AssociationDef,
    ) -> Result<Vec<Record>, StoreError> {
        load_dependents(registry, parent, association).await
    }
}
