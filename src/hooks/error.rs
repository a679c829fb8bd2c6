use thiserror::Error;

/// Error raised by a lifecycle hook handler.
///
/// A failing handler aborts the remaining handlers for its event and
/// propagates out of the wrapping operation.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Hook aborted: {0}")]
    Aborted(String),
}

impl HookError {
    /// Create an abort error with a message
    pub fn aborted(msg: impl Into<String>) -> Self {
        HookError::Aborted(msg.into())
    }
}
