use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// A partial-update document with set/unset semantics.
///
/// Field names are relative to the addressed document; for embedded documents
/// the collection resolves the positional path before applying them. `set`
/// assigns a value, `unset` removes the field entirely (not merely nulls it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDocument {
    set: BTreeMap<String, Value>,
    unset: BTreeSet<String>,
}

impl UpdateDocument {
    /// An empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `field` to `value`, builder style.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set.insert(field.into(), value.into());
        self
    }

    /// Remove `field` from the document, builder style.
    #[must_use]
    pub fn unset(mut self, field: impl Into<String>) -> Self {
        self.unset.insert(field.into());
        self
    }

    /// Fields to assign.
    #[must_use]
    pub fn sets(&self) -> &BTreeMap<String, Value> {
        &self.set
    }

    /// Fields to remove.
    #[must_use]
    pub fn unsets(&self) -> &BTreeSet<String> {
        &self.unset
    }

    /// Whether this update carries no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }
}
