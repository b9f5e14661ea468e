//! Trellis Core
//!
//! Coordinates browser navigation with an application lifecycle controller.
//! Applications on the page only observe a route change after the controller
//! has mounted and unmounted applications for it:
//!
//! ```text
//! pushState / replaceState / hashchange / popstate
//!   ↓
//! Router (synthesizes popstate for history updates)
//!   ↓
//! Reroute controller (mount / unmount)
//!   ↓
//! Captured application listeners
//! ```

mod config;
mod error;
mod global;
mod navigate;
mod reroute;
mod router;

#[cfg(test)]
mod test_support;

pub use config::RoutingOptions;
pub use error::CoreError;
pub use global::{global_navigate, install_global_navigate};
pub use navigate::NavigationOutcome;
pub use reroute::Reroute;
pub use router::Router;

// Re-export the building blocks
pub use trellis_events::{
    CapturedListeners, EventError, EventListener, EventOrigin, FailureSink, HistoryMethod,
    InvocationReport, ListenerFailure, MemoryHost, NavigationEvent, NavigationHost,
    RoutingEventKind, TracingSink, ROUTING_EVENT_KINDS,
};
pub use trellis_navigation::{
    plan_navigation, resolve_url, LinkClick, NavigationError, NavigationPlan, NavigationTarget,
    UrlParts,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
