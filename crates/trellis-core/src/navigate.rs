//! `navigate_to_url`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use trellis_navigation::{plan_navigation, NavigationPlan, NavigationTarget};

use crate::router::Router;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationOutcome {
    /// Only the fragment of the current location changed
    HashUpdated,
    /// A history entry was pushed; listeners hear about it as `popstate`
    Pushed,
    /// The destination was loaded as a new document
    Reloaded,
    /// Test mode stand-in for a cross-origin reload
    WouldHaveReloadedThePage,
}

impl Router {
    /// Navigate the page to `target` with the cheapest primitive that gets
    /// there. Click targets have their default action prevented first.
    pub fn navigate_to_url(
        &self,
        target: impl Into<NavigationTarget>,
    ) -> Result<NavigationOutcome> {
        let url = target.into().into_url();
        let host = self.host();

        let outcome = match plan_navigation(&host.href(), &url)? {
            NavigationPlan::SetHash(hash) => {
                host.set_hash(&hash)?;
                NavigationOutcome::HashUpdated
            }
            NavigationPlan::FullReload(_) if self.options().test_mode => {
                NavigationOutcome::WouldHaveReloadedThePage
            }
            NavigationPlan::FullReload(destination) => {
                host.assign(&destination)?;
                NavigationOutcome::Reloaded
            }
            NavigationPlan::PushState(destination) => {
                self.push_state(Value::Null, "", Some(&destination))?;
                NavigationOutcome::Pushed
            }
        };

        tracing::debug!(url = %url, outcome = ?outcome, "Navigated");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingOptions;
    use crate::error::CoreError;
    use crate::test_support::{setup, setup_with};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use trellis_events::{HistoryMethod, NavigationHost};
    use trellis_navigation::{resolve_url, NavigationError};

    #[test]
    fn test_fragment_navigation() {
        let (host, controller, router) = setup();
        host.replace_state(Value::Null, "", Some("/shop?item=4")).unwrap();
        let before = resolve_url(&host.href(), &host.href()).unwrap();

        let outcome = router.navigate_to_url("#section").unwrap();
        assert_eq!(outcome, NavigationOutcome::HashUpdated);

        let after = resolve_url(&host.href(), &host.href()).unwrap();
        assert_eq!(after.hash, "#section");
        assert_eq!(after.host, before.host);
        assert_eq!(after.pathname, before.pathname);
        assert_eq!(after.search, before.search);
        assert_eq!(host.history_len(), 1);

        // The platform reports the fragment change natively.
        let events = controller.events.lock();
        assert_eq!(events.len(), 1);
        let event = events[0].as_ref().unwrap();
        assert_eq!(event.event_type, "hashchange");
        assert!(!event.is_synthetic());
    }

    #[test]
    fn test_same_page_updates_fragment_only() {
        let (host, _controller, router) = setup();

        let outcome = router.navigate_to_url("/?#details").unwrap();
        assert_eq!(outcome, NavigationOutcome::HashUpdated);
        assert_eq!(host.href(), "https://app.example/#details");
        assert_eq!(host.history_len(), 1);
    }

    #[test]
    fn test_cross_origin_reloads() {
        let (host, controller, router) = setup();

        let outcome = router
            .navigate_to_url("https://other-host.example/path")
            .unwrap();
        assert_eq!(outcome, NavigationOutcome::Reloaded);
        assert_eq!(host.page_loads(), vec!["https://other-host.example/path"]);
        assert!(controller.events.lock().is_empty());
    }

    #[test]
    fn test_cross_origin_in_test_mode() {
        let (host, _controller, router) = setup_with(RoutingOptions {
            test_mode: true,
            ..RoutingOptions::default()
        });

        let outcome = router
            .navigate_to_url("https://other-host.example/path")
            .unwrap();
        assert_eq!(outcome, NavigationOutcome::WouldHaveReloadedThePage);
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!("wouldHaveReloadedThePage")
        );
        assert!(host.page_loads().is_empty());
        assert_eq!(host.href(), "https://app.example/");
    }

    #[test]
    fn test_click_event_navigation() {
        let (host, controller, router) = setup();
        let prevented = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&prevented);

        let outcome = router
            .navigate_to_url(NavigationTarget::event("/x", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        assert_eq!(outcome, NavigationOutcome::Pushed);
        assert_eq!(prevented.load(Ordering::SeqCst), 1);
        assert_eq!(host.href(), "https://app.example/x");
        assert_eq!(host.history_len(), 2);

        let events = controller.events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].as_ref().unwrap().trigger(),
            Some(HistoryMethod::PushState)
        );
    }

    #[test]
    fn test_link_navigation() {
        let (host, _controller, router) = setup();

        let outcome = router.navigate_to_url(NavigationTarget::link("settings?tab=2")).unwrap();
        assert_eq!(outcome, NavigationOutcome::Pushed);
        assert_eq!(host.href(), "https://app.example/settings?tab=2");
    }

    #[test]
    fn test_unrecognized_target() {
        let (_host, _controller, router) = setup();

        let navigate = |value: Value| -> Result<NavigationOutcome> {
            router.navigate_to_url(NavigationTarget::try_from(value)?)
        };

        assert!(matches!(
            navigate(json!(42)),
            Err(CoreError::Navigation(NavigationError::InvalidArgument(_)))
        ));
        assert_eq!(navigate(json!({ "href": "/ok" })).unwrap(), NavigationOutcome::Pushed);
    }
}
