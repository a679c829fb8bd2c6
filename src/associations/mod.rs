//! Dependent associations and the cascade collaborator interface.
mod foreign_key;
mod resolver;
mod types;

pub use foreign_key::ForeignKeyResolver;
pub use resolver::{AssociationResolver, NullResolver};
pub use types::{AssociationDef, Dependent};
