use crate::document::Attributes;
use serde_json::Value;

/// Presence test applied to a single field.
///
/// A missing attribute counts as null, so `Null` matches documents that never
/// carried the field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Null,
    NotNull,
}

/// A single `field IS NULL` / `field IS NOT NULL` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub presence: Presence,
}

impl Condition {
    /// Condition matching documents where `field` is null or absent.
    pub fn null(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::Null,
        }
    }

    /// Condition matching documents where `field` holds a non-null value.
    pub fn not_null(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            presence: Presence::NotNull,
        }
    }

    /// Evaluate this condition against an attribute map.
    #[must_use]
    pub fn matches(&self, attributes: &Attributes) -> bool {
        let is_null = matches!(attributes.get(&self.field), None | Some(Value::Null));
        match self.presence {
            Presence::Null => is_null,
            Presence::NotNull => !is_null,
        }
    }
}

/// A conjunction of conditions. An empty set matches everything (unscoped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    conditions: Vec<Condition>,
}

impl FilterSet {
    /// An empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An explicitly unscoped filter: matches every document.
    #[must_use]
    pub fn unscoped() -> Self {
        Self::default()
    }

    /// Add a condition, builder style.
    #[must_use]
    pub fn with(mut self, condition: Condition) -> Self {
        self.push(condition);
        self
    }

    /// Add a condition in place.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Conditions in evaluation order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether this set applies no filtering at all.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate every condition against an attribute map.
    #[must_use]
    pub fn matches(&self, attributes: &Attributes) -> bool {
        self.conditions.iter().all(|c| c.matches(attributes))
    }
}
