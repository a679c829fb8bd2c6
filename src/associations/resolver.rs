use super::types::AssociationDef;
use crate::document::Record;
use crate::schema::TypeRegistry;
use crate::store::StoreError;
use async_trait::async_trait;

/// Collaborator that resolves and propagates through associations.
///
/// The state machine stays agnostic of how dependents are stored: it asks the
/// resolver to cascade removal before a parent's deletion field is set, and to
/// load dependents when a restore is recursive.
#[async_trait]
pub trait AssociationResolver: Send + Sync {
    /// Propagate removal of `parent` through `association`.
    ///
    /// Called before the parent's deletion-timestamp field is set, so
    /// dependents still observe an active parent while cascading.
    async fn cascade_remove(
        &self,
        registry: &TypeRegistry,
        parent: &Record,
        association: &AssociationDef,
    ) -> Result<(), StoreError>;

    /// Load the current dependents of `parent` under `association`.
    async fn dependents(
        &self,
        registry: &TypeRegistry,
        parent: &Record,
        association: &AssociationDef,
    ) -> Result<Vec<Record>, StoreError>;
}

/// Resolver for types without dependents: never cascades, never loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

#[async_trait]
impl AssociationResolver for NullResolver {
    async fn cascade_remove(
        &self,
        _registry: &TypeRegistry,
        _parent: &Record,
        _association: &AssociationDef,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn dependents(
        &self,
        _registry: &TypeRegistry,
        _parent: &Record,
        _association: &AssociationDef,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(Vec::new())
    }
}
