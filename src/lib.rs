// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod associations;
pub mod config;
pub mod document;
pub mod hooks;
pub mod lifecycle;
pub mod query;
pub mod schema;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use associations::{
    AssociationDef, AssociationResolver, Dependent, ForeignKeyResolver, NullResolver,
};
pub use config::{ParanoiaConfig, DEFAULT_FIELD, DEFAULT_SCOPE};
pub use document::{Attributes, Document, DocumentLocation, Record};
pub use hooks::{HookError, HookSet, LifecycleEvent, Phase};
pub use lifecycle::{
    evaluate_predicate, hard_delete, is_destroyed, is_persisted, restore, soft_remove,
    LifecycleError, RestoreOptions,
};
pub use query::QueryError;
pub use schema::{
    install, set_custom_field, set_custom_scope, FieldDef, FieldKind, Predicate, RegisteredType,
    ScopeField, TypeDefinition, TypeRegistry,
};
pub use store::{
    Collection, Condition, FilterSet, MemoryCollection, Presence, StoreError, UpdateDocument,
};
