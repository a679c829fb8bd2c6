use crate::associations::AssociationDef;
use crate::config::ParanoiaConfig;
use crate::hooks::HookSet;
use crate::store::{Condition, FilterSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Timestamp,
    String,
}

/// A field declared on a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    /// Declare a timestamp field.
    pub fn timestamp(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Timestamp,
        }
    }

    /// Declare a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::String,
        }
    }
}

/// Which field a named scope filters on.
///
/// The default-named scope tracks the type's current paranoid field, so it
/// stays correct when the field name is overridden after installation.
/// Custom-named scopes are pinned to the field they were installed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeField {
    /// Resolve to the type's paranoid field at query time.
    Paranoid,
    /// A fixed field name.
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedScope {
    name: String,
    field: ScopeField,
}

/// Capability lookup target for a registered predicate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Equivalent to the destroyed-check.
    Destroyed,
}

/// Definition of one record type: its paranoia configuration snapshot,
/// declared fields, query scoping, predicate dispatch table, associations,
/// and lifecycle hooks.
#[derive(Debug, Default)]
pub struct TypeDefinition {
    pub(super) name: String,
    pub(super) config: ParanoiaConfig,
    pub(super) paranoid: bool,
    fields: Vec<FieldDef>,
    default_filters: Vec<Condition>,
    scopes: Vec<NamedScope>,
    predicates: HashMap<String, Predicate>,
    associations: Vec<AssociationDef>,
    hooks: HookSet,
}

impl TypeDefinition {
    /// Create a bare definition. Soft-delete behavior is added by
    /// [`crate::schema::install`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Registered name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This type's paranoia configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &ParanoiaConfig {
        &self.config
    }

    /// Name of this type's deletion-timestamp field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.config.field
    }

    /// Name of this type's deletion scope.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        &self.config.scope
    }

    /// Whether soft-delete behavior has been installed on this type.
    #[must_use]
    pub fn is_paranoid(&self) -> bool {
        self.paranoid
    }

    /// Declare a field, skipping names already declared.
    pub fn declare_field(&mut self, field: FieldDef) {
        if !self.fields.iter().any(|f| f.name == field.name) {
            self.fields.push(field);
        }
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Whether a field with `name` has been declared.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Add a default-filter condition, skipping duplicates.
    pub(super) fn push_default_filter(&mut self, condition: Condition) {
        if !self.default_filters.contains(&condition) {
            self.default_filters.push(condition);
        }
    }

    /// The filter applied to default queries against this type.
    #[must_use]
    pub fn default_filter(&self) -> FilterSet {
        let mut filter = FilterSet::new();
        for condition in &self.default_filters {
            filter.push(condition.clone());
        }
        filter
    }

    /// Install or replace a named scope.
    pub(super) fn insert_scope(&mut self, name: &str, field: ScopeField) {
        if let Some(existing) = self.scopes.iter_mut().find(|s| s.name == name) {
            existing.field = field;
        } else {
            self.scopes.push(NamedScope {
                name: name.to_string(),
                field,
            });
        }
    }

    /// Resolve a named scope into the filter it applies.
    #[must_use]
    pub fn scope(&self, name: &str) -> Option<FilterSet> {
        self.scopes.iter().find(|s| s.name == name).map(|s| {
            let field = match &s.field {
                ScopeField::Paranoid => self.config.field.clone(),
                ScopeField::Named(field) => field.clone(),
            };
            FilterSet::new().with(Condition::not_null(field))
        })
    }

    /// Names of the installed scopes, in installation order.
    #[must_use]
    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes.iter().map(|s| s.name.as_str()).collect()
    }

    /// Install or replace a predicate name in the dispatch table.
    pub(super) fn insert_predicate(&mut self, name: &str, predicate: Predicate) {
        self.predicates.insert(name.to_string(), predicate);
    }

    /// Look up a predicate by name.
    #[must_use]
    pub fn predicate(&self, name: &str) -> Option<Predicate> {
        self.predicates.get(name).copied()
    }

    /// Declare an association from this type.
    pub fn associate(&mut self, association: AssociationDef) {
        self.associations.push(association);
    }

    /// Declared associations.
    #[must_use]
    pub fn associations(&self) -> &[AssociationDef] {
        &self.associations
    }

    /// Lifecycle hooks for this type.
    #[must_use]
    pub fn hooks(&self) -> &HookSet {
        &self.hooks
    }

    /// Mutable access for hook registration at setup time.
    pub fn hooks_mut(&mut self) -> &mut HookSet {
        &mut self.hooks
    }
}
