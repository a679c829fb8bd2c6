use super::types::ParanoiaConfig;
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

static CURRENT: Lazy<RwLock<ParanoiaConfig>> =
    Lazy::new(|| RwLock::new(ParanoiaConfig::default()));

/// Get a copy of the process-wide configuration, creating the default
/// instance on first access.
#[must_use]
pub fn get() -> ParanoiaConfig {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide configuration with a fresh default.
///
/// Useful to restore a known baseline between independent test runs.
pub fn reset() {
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = ParanoiaConfig::default();
}

/// Mutate the process-wide configuration in place.
///
/// Intended for single-threaded setup phases (type definition time), not for
/// mutation during live request handling.
pub fn configure<F>(mutator: F)
where
    F: FnOnce(&mut ParanoiaConfig),
{
    let mut guard = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    mutator(&mut guard);
}
