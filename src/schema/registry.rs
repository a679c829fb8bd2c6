use super::types::TypeDefinition;
use crate::store::Collection;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// A record type bound to the collection storing its documents.
pub struct RegisteredType {
    pub definition: TypeDefinition,
    pub collection: Arc<dyn Collection>,
}

impl fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredType")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

/// In-memory registry of record types keyed by type name.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type with its backing collection.
    /// Skips duplicate names, first registration wins.
    pub fn register(&mut self, definition: TypeDefinition, collection: Arc<dyn Collection>) {
        let name = definition.name().to_string();
        if self.types.contains_key(&name) {
            warn!(type_name = %name, "Duplicate type name detected, skipping");
            return;
        }
        info!(
            type_name = %name,
            paranoid = definition.is_paranoid(),
            "Record type registered"
        );
        self.types.insert(
            name,
            RegisteredType {
                definition,
                collection,
            },
        );
    }

    /// Get a registered type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredType> {
        self.types.get(name)
    }

    /// Get a type definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name).map(|t| &t.definition)
    }

    /// Mutable definition access, for hook registration at setup time.
    pub fn definition_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(name).map(|t| &mut t.definition)
    }

    /// Get the collection backing a type.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<Arc<dyn Collection>> {
        self.types.get(name).map(|t| Arc::clone(&t.collection))
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Names of all registered types.
    #[must_use]
    pub fn names(&self) -> Vec<&String> {
        self.types.keys().collect()
    }
}
