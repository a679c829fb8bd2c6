use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a document lives inside its collection.
///
/// Top-level documents are addressed by identity alone. Embedded documents are
/// addressed by the identity of their root aggregate plus a positional path
/// inside it (dot-separated; numeric segments index into arrays), e.g.
/// `comments.2` for the third element of the root's `comments` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DocumentLocation {
    /// A top-level document addressed by its own id.
    Root {
        /// Unique identity within the collection.
        id: Value,
    },
    /// A document nested inside a root aggregate.
    Embedded {
        /// Identity of the root aggregate.
        root_id: Value,
        /// Positional path from the root's attributes to this document.
        path: String,
    },
}

impl DocumentLocation {
    /// Address a top-level document.
    pub fn root(id: impl Into<Value>) -> Self {
        Self::Root { id: id.into() }
    }

    /// Address an embedded document inside a root aggregate.
    pub fn embedded(root_id: impl Into<Value>, path: impl Into<String>) -> Self {
        Self::Embedded {
            root_id: root_id.into(),
            path: path.into(),
        }
    }

    /// Identity of the root document this location resolves through.
    #[must_use]
    pub fn root_id(&self) -> &Value {
        match self {
            Self::Root { id } => id,
            Self::Embedded { root_id, .. } => root_id,
        }
    }

    /// Positional path for embedded locations.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Root { .. } => None,
            Self::Embedded { path, .. } => Some(path),
        }
    }

    /// Whether this location addresses an embedded document.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded { .. })
    }
}
