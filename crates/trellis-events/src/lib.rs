//! Trellis Events
//!
//! Routing events (`hashchange`, `popstate`) are held back from applications
//! until the lifecycle controller has settled the new route:
//! - Application listeners for routing events are captured instead of being
//!   registered with the platform
//! - The controller replays events to captured listeners once mounting is done
//! - Listener failures are isolated and reported after the whole batch ran

mod error;
mod event;
mod host;
mod listener;
mod memory;
mod registry;

pub use error::EventError;
pub use event::{
    EventOrigin, HistoryMethod, NavigationEvent, RoutingEventKind, ROUTING_EVENT_KINDS,
};
pub use host::NavigationHost;
pub use listener::EventListener;
pub use memory::MemoryHost;
pub use registry::{
    CapturedListeners, FailureSink, InvocationReport, ListenerFailure, TracingSink,
};

pub type Result<T> = std::result::Result<T, EventError>;
