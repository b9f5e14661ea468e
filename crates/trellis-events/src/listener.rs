//! Event listener handles
//!
//! Listeners are compared by identity, like DOM listeners: a clone of a handle
//! is the same listener, two closures with identical bodies are not.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::event::NavigationEvent;

type ListenerFn = dyn Fn(&NavigationEvent) -> anyhow::Result<()> + Send + Sync;

#[derive(Clone)]
pub struct EventListener(Arc<ListenerFn>);

impl EventListener {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&NavigationEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, event: &NavigationEvent) -> anyhow::Result<()> {
        (self.0)(event)
    }

    /// Call the listener, turning a panic into an error so the caller can keep
    /// notifying other listeners.
    pub fn call_isolated(&self, event: &NavigationEvent) -> anyhow::Result<()> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.call(event))) {
            Ok(result) => result,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic payload".to_string());
                Err(anyhow::anyhow!("listener panicked: {}", message))
            }
        }
    }

    pub fn same_as(&self, other: &EventListener) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for EventListener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for EventListener {}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventListener({:p})", Arc::as_ptr(&self.0))
    }
}
