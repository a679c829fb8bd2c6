/// Phase of hook execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pre,
    Post,
}

impl Phase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pre => "pre",
            Phase::Post => "post",
        }
    }
}

/// Lifecycle events that hooks can observe.
///
/// `Remove` wraps both soft removal and (nested inside `Destroy`) hard
/// deletion; `Restore` wraps restoration; `Destroy` wraps hard deletion only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Remove,
    Restore,
    Destroy,
}

impl LifecycleEvent {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Remove => "remove",
            LifecycleEvent::Restore => "restore",
            LifecycleEvent::Destroy => "destroy",
        }
    }
}
