//! Global naming configuration for soft deletion.
mod registry;
mod types;

pub use registry::{configure, get, reset};
pub use types::{ParanoiaConfig, DEFAULT_FIELD, DEFAULT_SCOPE};

/// Serializes tests that touch the process-wide configuration.
#[cfg(test)]
pub(crate) fn test_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    &LOCK
}
