//! Storage abstraction: collections, filters, and partial updates.
mod collection;
mod error;
mod filter;
mod memory;
mod update;

pub use collection::Collection;
pub use error::StoreError;
pub use filter::{Condition, FilterSet, Presence};
pub use memory::MemoryCollection;
pub use update::UpdateDocument;

#[cfg(test)]
#[path = "memory_tests_1.rs"]
mod memory_tests_1;
#[cfg(test)]
#[path = "memory_tests_2.rs"]
mod memory_tests_2;
