use super::error::HookError;
use super::types::{LifecycleEvent, Phase};
use crate::document::Record;
use std::fmt;

type HookFn = Box<dyn Fn(&Record) -> Result<(), HookError> + Send + Sync>;

struct RegisteredHook {
    phase: Phase,
    event: LifecycleEvent,
    callback: HookFn,
}

/// Ordered pre/post handlers per lifecycle event for one record type.
///
/// Handlers run synchronously in registration order; the first failure aborts
/// the remaining handlers and propagates to the caller.
#[derive(Default)]
pub struct HookSet {
    hooks: Vec<RegisteredHook>,
}

impl HookSet {
    /// Register a handler for `phase`/`event`.
    pub fn register<F>(&mut self, phase: Phase, event: LifecycleEvent, callback: F)
    where
        F: Fn(&Record) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.hooks.push(RegisteredHook {
            phase,
            event,
            callback: Box::new(callback),
        });
    }

    /// Run all handlers registered for `phase`/`event` against `record`.
    pub fn run(
        &self,
        phase: Phase,
        event: LifecycleEvent,
        record: &Record,
    ) -> Result<(), HookError> {
        for hook in self
            .hooks
            .iter()
            .filter(|h| h.phase == phase && h.event == event)
        {
            (hook.callback)(record)?;
        }
        Ok(())
    }

    /// Number of handlers registered for `phase`/`event`.
    #[must_use]
    pub fn count(&self, phase: Phase, event: LifecycleEvent) -> usize {
        self.hooks
            .iter()
            .filter(|h| h.phase == phase && h.event == event)
            .count()
    }

    /// Whether no handlers are registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSet")
            .field("registered", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
