use serde::{Deserialize, Serialize};

/// Default name of the field storing the deletion timestamp.
pub const DEFAULT_FIELD: &str = "deleted_at";

/// Default name of the query scope selecting deleted records.
pub const DEFAULT_SCOPE: &str = "deleted";

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

/// Naming configuration for soft deletion.
///
/// One process-wide instance lives in the [`crate::config`] registry; each
/// record type takes a value-copy of it at definition time and may override
/// either name independently afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParanoiaConfig {
    /// Field holding the deletion timestamp (e.g. `deleted_at`).
    #[serde(default = "default_field")]
    pub field: String,
    /// Name of the query scope that retrieves deleted records (e.g. `deleted`).
    #[serde(default = "default_scope")]
    pub scope: String,
}

impl Default for ParanoiaConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            scope: default_scope(),
        }
    }
}

impl ParanoiaConfig {
    /// Derive a field name from a scope name (`archived` becomes `archived_at`).
    #[must_use]
    pub fn derived_field_name(scope: &str) -> String {
        format!("{scope}_at")
    }

    /// Whether the field name is still the built-in default.
    #[must_use]
    pub fn has_default_field(&self) -> bool {
        self.field == DEFAULT_FIELD
    }

    /// Whether the scope name is still the built-in default.
    #[must_use]
    pub fn has_default_scope(&self) -> bool {
        self.scope == DEFAULT_SCOPE
    }
}
