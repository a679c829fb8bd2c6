use serde::{Deserialize, Serialize};

/// What happens to dependent records when their parent is destroyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dependent {
    /// Propagate the removal to the dependents.
    Destroy,
    /// Leave the dependents untouched.
    #[default]
    Retain,
}

/// A declared association from one record type to another.
///
/// Only the pieces the soft-delete layer needs: the target type, the foreign
/// key dependents carry, and the dependent-on-destroy marker. Destroy-marked
/// associations are cascaded on removal and walked by recursive restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDef {
    /// Association name (e.g. `comments`).
    pub name: String,
    /// Registered name of the dependent record type.
    pub target_type: String,
    /// Field on the dependents holding the parent's id.
    pub foreign_key: String,
    /// Destroy propagation marker.
    pub dependent: Dependent,
}

impl AssociationDef {
    /// Declare an association with the default `Retain` marker.
    pub fn new(
        name: impl Into<String>,
        target_type: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            foreign_key: foreign_key.into(),
            dependent: Dependent::Retain,
        }
    }

    /// Mark this association as destroy-on-parent-destroy, builder style.
    #[must_use]
    pub fn dependent_destroy(mut self) -> Self {
        self.dependent = Dependent::Destroy;
        self
    }
}
