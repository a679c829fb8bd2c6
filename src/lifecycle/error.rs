//! Unified error type for lifecycle operations.

use thiserror::Error;

/// Errors surfaced by the soft-delete state machine.
///
/// Storage and hook failures are wrapped unmodified; the state machine adds no
/// retry, backoff, or partial-failure compensation of its own.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Unknown record type: {0}")]
    UnknownType(String),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Hook error: {0}")]
    Hook(#[from] crate::hooks::HookError),
}
