use super::error::StoreError;
use super::filter::FilterSet;
use super::update::UpdateDocument;
use crate::document::{Attributes, Document, DocumentLocation};
use async_trait::async_trait;

/// The narrow storage interface the soft-delete layer is built on.
///
/// Implementations address documents by identity (or positional path for
/// embedded documents) and apply partial updates with set/unset semantics.
/// Passing [`FilterSet::unscoped`] to the read operations bypasses default
/// deleted-record filtering; [`Collection::delete_one`] is inherently
/// unscoped, as required for hard deletes of records the default filter would
/// hide.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Find the document at `location`, returning its attributes when it
    /// exists and satisfies `filter`.
    async fn find_one(
        &self,
        location: &DocumentLocation,
        filter: &FilterSet,
    ) -> Result<Option<Attributes>, StoreError>;

    /// List all top-level documents satisfying `filter`.
    async fn list(&self, filter: &FilterSet) -> Result<Vec<Document>, StoreError>;

    /// Apply a partial update to the document at `location`.
    async fn update_one(
        &self,
        location: &DocumentLocation,
        update: &UpdateDocument,
    ) -> Result<(), StoreError>;

    /// Physically remove the document at `location`.
    async fn delete_one(&self, location: &DocumentLocation) -> Result<(), StoreError>;
}
