use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute map of a document, keyed by field name.
pub type Attributes = serde_json::Map<String, Value>;

/// A stored top-level document: a unique id plus its attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identity within the collection.
    pub id: Value,
    /// Field values, including any embedded subdocuments.
    pub attributes: Attributes,
}

impl Document {
    /// Create a document from an id and attribute map.
    pub fn new(id: impl Into<Value>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }
}
