//! Shared fixtures for router tests

use parking_lot::Mutex;
use std::sync::Arc;

use trellis_events::{CapturedListeners, EventListener, MemoryHost, NavigationEvent};

use crate::config::RoutingOptions;
use crate::reroute::Reroute;
use crate::router::Router;

pub(crate) const START_URL: &str = "https://app.example/";

/// Lifecycle controller that "mounts" instantly and then replays the event to
/// captured listeners, recording what it saw.
#[derive(Default)]
pub(crate) struct ReplayingController {
    pub log: Arc<Mutex<Vec<String>>>,
    pub events: Mutex<Vec<Option<NavigationEvent>>>,
    /// (invoked, failed) per replay
    pub reports: Mutex<Vec<(usize, usize)>>,
}

impl Reroute for ReplayingController {
    fn reroute(
        &self,
        pending_apps: &[String],
        event: Option<&NavigationEvent>,
        listeners: &CapturedListeners,
    ) {
        assert!(pending_apps.is_empty());

        let kind = event.map_or("none", |e| e.event_type.as_str());
        self.log.lock().push(format!("reroute:{}", kind));
        self.events.lock().push(event.cloned());

        let report = listeners.call_captured_event_listeners(event);
        self.reports
            .lock()
            .push((report.invoked, report.failures.len()));
    }
}

pub(crate) fn recording_listener(
    log: &Arc<Mutex<Vec<String>>>,
    name: &'static str,
) -> EventListener {
    let log = Arc::clone(log);
    EventListener::new(move |event| {
        log.lock().push(format!("{}:{}", name, event.event_type));
        Ok(())
    })
}

pub(crate) fn setup() -> (Arc<MemoryHost>, Arc<ReplayingController>, Router) {
    setup_with(RoutingOptions::default())
}

pub(crate) fn setup_with(
    options: RoutingOptions,
) -> (Arc<MemoryHost>, Arc<ReplayingController>, Router) {
    let host = Arc::new(MemoryHost::new(START_URL).unwrap());
    setup_on(host, options)
}

pub(crate) fn setup_on(
    host: Arc<MemoryHost>,
    options: RoutingOptions,
) -> (Arc<MemoryHost>, Arc<ReplayingController>, Router) {
    let controller = Arc::new(ReplayingController::default());
    let router = Router::install(host.clone(), controller.clone(), options).unwrap();
    (host, controller, router)
}
