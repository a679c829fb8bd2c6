//! Record type definitions, per-type paranoia setup, and the type registry.
mod installer;
mod registry;
mod types;

pub use installer::{install, set_custom_field, set_custom_scope};
pub use registry::{RegisteredType, TypeRegistry};
pub use types::{FieldDef, FieldKind, Predicate, ScopeField, TypeDefinition};

#[cfg(test)]
#[path = "installer_tests_1.rs"]
mod installer_tests_1;
#[cfg(test)]
#[path = "installer_tests_2.rs"]
mod installer_tests_2;
#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
