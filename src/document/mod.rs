//! Record instances and document addressing.
mod location;
mod record;
mod types;

pub use location::DocumentLocation;
pub use record::Record;
pub use types::{Attributes, Document};
