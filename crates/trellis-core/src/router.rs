//! History patching
//!
//! The router is the only party listening to the platform for `hashchange` and
//! `popstate`. Applications register through the router instead: their routing
//! listeners are captured and replayed by the lifecycle controller once it has
//! settled the new route, while every other event type goes straight to the
//! host. History updates made through the router are reported as a synthetic
//! `popstate`, since the platform never reports them itself.

use serde_json::Value;
use std::sync::Arc;

use trellis_events::{
    CapturedListeners, EventListener, HistoryMethod, NavigationEvent, NavigationHost,
    RoutingEventKind,
};

use crate::config::RoutingOptions;
use crate::error::CoreError;
use crate::reroute::Reroute;
use crate::Result;

struct RouterInner {
    host: Arc<dyn NavigationHost>,
    controller: Arc<dyn Reroute>,
    captured: CapturedListeners,
    options: RoutingOptions,
}

impl RouterInner {
    fn reroute(&self, event: Option<&NavigationEvent>) {
        self.controller.reroute(&[], event, &self.captured);
    }
}

pub struct Router {
    inner: Arc<RouterInner>,
}

impl Router {
    /// Patch the navigation surface of `host`.
    ///
    /// Fails with [`CoreError::AlreadyPatched`] if the host was patched
    /// before; the existing router keeps working.
    pub fn install(
        host: Arc<dyn NavigationHost>,
        controller: Arc<dyn Reroute>,
        options: RoutingOptions,
    ) -> Result<Self> {
        Self::install_with_listeners(host, controller, options, CapturedListeners::new())
    }

    /// Like [`install`](Self::install), capturing listeners into an existing
    /// registry (e.g. one with a custom failure sink).
    pub fn install_with_listeners(
        host: Arc<dyn NavigationHost>,
        controller: Arc<dyn Reroute>,
        options: RoutingOptions,
        captured: CapturedListeners,
    ) -> Result<Self> {
        if !host.claim_patch() {
            return Err(CoreError::AlreadyPatched);
        }

        let inner = Arc::new(RouterInner {
            host,
            controller,
            captured,
            options,
        });

        // The patch lasts as long as the page, so the host keeps the router
        // (and its captured listeners) alive even after every handle is gone.
        for kind in RoutingEventKind::ALL {
            let router = Arc::clone(&inner);
            inner.host.add_event_listener(
                kind.as_str(),
                EventListener::new(move |event| {
                    router.reroute(Some(event));
                    Ok(())
                }),
            );
        }

        tracing::info!(
            url_reroute_only = inner.options.url_reroute_only,
            test_mode = inner.options.test_mode,
            "Patched history API"
        );

        Ok(Self { inner })
    }

    pub fn options(&self) -> &RoutingOptions {
        &self.inner.options
    }

    pub fn host(&self) -> &Arc<dyn NavigationHost> {
        &self.inner.host
    }

    /// Registry of application listeners for routing events
    pub fn captured_listeners(&self) -> &CapturedListeners {
        &self.inner.captured
    }

    pub fn href(&self) -> String {
        self.inner.host.href()
    }

    pub fn push_state(&self, state: Value, title: &str, url: Option<&str>) -> Result<()> {
        self.update_state(HistoryMethod::PushState, state, title, url)
    }

    pub fn replace_state(&self, state: Value, title: &str, url: Option<&str>) -> Result<()> {
        self.update_state(HistoryMethod::ReplaceState, state, title, url)
    }

    /// `pushState` as it was before patching: no event, no reroute
    pub fn original_push_state(&self, state: Value, title: &str, url: Option<&str>) -> Result<()> {
        Ok(self.inner.host.push_state(state, title, url)?)
    }

    /// `replaceState` as it was before patching: no event, no reroute
    pub fn original_replace_state(
        &self,
        state: Value,
        title: &str,
        url: Option<&str>,
    ) -> Result<()> {
        Ok(self.inner.host.replace_state(state, title, url)?)
    }

    fn update_state(
        &self,
        method: HistoryMethod,
        state: Value,
        title: &str,
        url: Option<&str>,
    ) -> Result<()> {
        let host = &self.inner.host;

        let url_before = host.href();
        match method {
            HistoryMethod::PushState => host.push_state(state, title, url)?,
            HistoryMethod::ReplaceState => host.replace_state(state, title, url)?,
        }
        let url_after = host.href();

        if !self.inner.options.url_reroute_only || url_before != url_after {
            tracing::debug!(trigger = %method, url = %url_after, "Dispatching synthetic popstate");
            host.dispatch_event(&NavigationEvent::synthetic(host.history_state(), method));
        }

        Ok(())
    }

    /// Register a listener. `hashchange` and `popstate` listeners are captured
    /// (once per listener); everything else is registered with the host.
    pub fn add_event_listener(&self, event_type: &str, listener: EventListener) {
        match RoutingEventKind::from_name(event_type) {
            Some(kind) => {
                self.inner.captured.add(kind, listener);
            }
            None => self.inner.host.add_event_listener(event_type, listener),
        }
    }

    pub fn remove_event_listener(&self, event_type: &str, listener: &EventListener) {
        match RoutingEventKind::from_name(event_type) {
            Some(kind) => {
                self.inner.captured.remove(kind, listener);
            }
            None => self.inner.host.remove_event_listener(event_type, listener),
        }
    }

    /// Ask the lifecycle controller to reroute without an event
    pub fn trigger_reroute(&self) {
        self.inner.reroute(None);
    }
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
