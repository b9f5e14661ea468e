//! Lifecycle controller seam

use trellis_events::{CapturedListeners, NavigationEvent};

/// The application lifecycle controller.
///
/// Called for every routing event that reaches the page, real or synthetic,
/// and for manual reroutes (`event` is `None`). After mounting and unmounting
/// applications for the new URL, the controller is expected to call
/// [`CapturedListeners::call_captured_event_listeners`] with the same event so
/// application listeners observe the settled route.
pub trait Reroute: Send + Sync {
    fn reroute(
        &self,
        pending_apps: &[String],
        event: Option<&NavigationEvent>,
        listeners: &CapturedListeners,
    );
}

impl<F> Reroute for F
where
    F: Fn(&[String], Option<&NavigationEvent>, &CapturedListeners) + Send + Sync,
{
    fn reroute(
        &self,
        pending_apps: &[String],
        event: Option<&NavigationEvent>,
        listeners: &CapturedListeners,
    ) {
        self(pending_apps, event, listeners)
    }
}
