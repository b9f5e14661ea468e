//! Process-wide `navigate_to_url`
//!
//! Markup and scripts without a router handle navigate through the router
//! installed here. Only the first installation wins; installing a second
//! router would deliver every routing event twice.

use std::sync::OnceLock;

use trellis_navigation::NavigationTarget;

use crate::error::CoreError;
use crate::navigate::NavigationOutcome;
use crate::router::Router;
use crate::Result;

static GLOBAL_ROUTER: OnceLock<Router> = OnceLock::new();

/// Install `router` as the global navigation entry point. Returns false and
/// keeps the existing one if a router was installed before.
pub fn install_global_navigate(router: &Router) -> bool {
    match GLOBAL_ROUTER.set(router.clone()) {
        Ok(()) => {
            tracing::info!("Installed global navigate_to_url");
            true
        }
        Err(_) => {
            tracing::warn!(
                "A global navigate_to_url is already installed; keeping it. \
                 Routing events may be delivered twice if two routers run on one page"
            );
            false
        }
    }
}

pub fn global_navigate(target: impl Into<NavigationTarget>) -> Result<NavigationOutcome> {
    GLOBAL_ROUTER
        .get()
        .ok_or(CoreError::NotInitialized)?
        .navigate_to_url(target)
}
