//! Captured listener registry
//!
//! Application listeners for routing events live here instead of with the
//! platform. They only run when the lifecycle controller replays an event
//! after it has finished mounting and unmounting applications.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::event::{NavigationEvent, RoutingEventKind};
use crate::listener::EventListener;

/// A captured listener that returned an error or panicked during replay
#[derive(Error, Debug)]
#[error("{kind} listener #{index} failed: {error:#}")]
pub struct ListenerFailure {
    pub kind: RoutingEventKind,
    /// Position of the listener in registration order
    pub index: usize,
    pub error: anyhow::Error,
}

/// Receives listener failures once a replay batch has completed
pub trait FailureSink: Send + Sync {
    fn report(&self, failures: &[ListenerFailure]);
}

/// Default sink: every failure becomes an error event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn report(&self, failures: &[ListenerFailure]) {
        for failure in failures {
            tracing::error!(
                kind = %failure.kind,
                index = failure.index,
                "Captured listener failed: {:#}",
                failure.error
            );
        }
    }
}

#[derive(Debug, Default)]
pub struct InvocationReport {
    /// Kind that was replayed, `None` when nothing matched
    pub kind: Option<RoutingEventKind>,
    pub invoked: usize,
    pub failures: Vec<ListenerFailure>,
}

impl InvocationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Shared handle to the captured listeners of one page
#[derive(Clone)]
pub struct CapturedListeners {
    listeners: Arc<RwLock<HashMap<RoutingEventKind, Vec<EventListener>>>>,
    sink: Arc<dyn FailureSink>,
}

impl CapturedListeners {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn FailureSink>) -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
            sink,
        }
    }

    /// Capture a listener. Returns false if this exact listener is already
    /// captured for `kind`.
    pub fn add(&self, kind: RoutingEventKind, listener: EventListener) -> bool {
        let mut listeners = self.listeners.write();
        let captured = listeners.entry(kind).or_default();

        if captured.iter().any(|l| l.same_as(&listener)) {
            return false;
        }

        captured.push(listener);
        tracing::debug!(kind = %kind, count = captured.len(), "Captured listener");
        true
    }

    /// Release a listener. Unknown listeners are ignored.
    pub fn remove(&self, kind: RoutingEventKind, listener: &EventListener) -> bool {
        let mut listeners = self.listeners.write();
        let Some(captured) = listeners.get_mut(&kind) else {
            return false;
        };

        let before = captured.len();
        captured.retain(|l| !l.same_as(listener));
        let removed = captured.len() != before;

        if removed {
            tracing::debug!(kind = %kind, count = captured.len(), "Released listener");
        }
        removed
    }

    /// Listeners for `kind` in registration order
    pub fn listeners(&self, kind: RoutingEventKind) -> Vec<EventListener> {
        self.listeners
            .read()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, kind: RoutingEventKind) -> usize {
        self.listeners.read().get(&kind).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().values().all(Vec::is_empty)
    }

    /// Replay `event` to every listener captured for its kind.
    ///
    /// Listeners run in registration order against a snapshot, so a listener
    /// may add or remove listeners (or navigate again) without affecting the
    /// current batch. A failing listener does not stop the ones after it;
    /// failures go to the sink after the batch and are returned in the report.
    pub fn call_captured_event_listeners(
        &self,
        event: Option<&NavigationEvent>,
    ) -> InvocationReport {
        let Some(event) = event else {
            return InvocationReport::default();
        };
        let Some(kind) = event.routing_kind() else {
            return InvocationReport::default();
        };

        let snapshot = self.listeners(kind);
        let mut failures = Vec::new();

        for (index, listener) in snapshot.iter().enumerate() {
            if let Err(error) = listener.call_isolated(event) {
                failures.push(ListenerFailure { kind, index, error });
            }
        }

        if !failures.is_empty() {
            self.sink.report(&failures);
        }

        InvocationReport {
            kind: Some(kind),
            invoked: snapshot.len(),
            failures,
        }
    }
}

impl Default for CapturedListeners {
    fn default() -> Self {
        Self::new()
    }
}
