use super::location::DocumentLocation;
use super::types::Attributes;
use serde_json::Value;

/// An in-memory record instance bound to a registered type.
///
/// Carries the attribute map loaded from (or destined for) storage plus two
/// transient flags that are never persisted: `destroyed`, set when a deletion
/// was performed through this instance, and `new_record`, distinguishing
/// unsaved instances from hydrated ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    location: DocumentLocation,
    attributes: Attributes,
    destroyed: bool,
    new_record: bool,
}

impl Record {
    /// Create a new, unsaved record.
    pub fn new(type_name: impl Into<String>, location: DocumentLocation) -> Self {
        Self {
            type_name: type_name.into(),
            location,
            attributes: Attributes::new(),
            destroyed: false,
            new_record: true,
        }
    }

    /// Create a record hydrated from stored attributes.
    pub fn hydrated(
        type_name: impl Into<String>,
        location: DocumentLocation,
        attributes: Attributes,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            location,
            attributes,
            destroyed: false,
            new_record: false,
        }
    }

    /// Name of the record type this instance belongs to.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Storage address of this record.
    #[must_use]
    pub fn location(&self) -> &DocumentLocation {
        &self.location
    }

    /// Identity of the root document this record resolves through.
    #[must_use]
    pub fn id(&self) -> &Value {
        self.location.root_id()
    }

    /// Full attribute map.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up a single attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute in memory.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute from the in-memory map entirely.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Whether this instance has never been saved.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.new_record
    }

    /// Mark this instance as saved.
    pub fn mark_persisted(&mut self) {
        self.new_record = false;
    }

    /// Transient destroyed flag (not persisted).
    #[must_use]
    pub fn destroyed_flag(&self) -> bool {
        self.destroyed
    }

    /// Set the transient destroyed flag.
    pub fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }

    /// Clear the transient destroyed flag.
    pub fn clear_destroyed(&mut self) {
        self.destroyed = false;
    }
}
