//! Navigation host
//!
//! The raw, unpatched navigation surface of one page: location, History API and
//! the platform's own event listener registry. A browser binding implements this
//! on top of `window`; [`MemoryHost`](crate::MemoryHost) keeps everything in
//! memory.

use serde_json::Value;

use crate::event::NavigationEvent;
use crate::listener::EventListener;
use crate::Result;

pub trait NavigationHost: Send + Sync {
    /// Absolute URL of the current document
    fn href(&self) -> String;

    /// State of the current history entry, `Null` when none was stored
    fn history_state(&self) -> Value;

    /// Add a history entry. `url` is resolved against [`href`](Self::href).
    /// Never fires an event.
    fn push_state(&self, state: Value, title: &str, url: Option<&str>) -> Result<()>;

    /// Overwrite the current history entry. Never fires an event.
    fn replace_state(&self, state: Value, title: &str, url: Option<&str>) -> Result<()>;

    /// Assign the fragment of the current location. Fires a native
    /// `hashchange` when the fragment actually changes.
    ///
    /// Hosts may differ on clearing a fragment that is not there: a browser
    /// leaves a trailing `#`, [`MemoryHost`](crate::MemoryHost) leaves the
    /// URL untouched.
    fn set_hash(&self, hash: &str) -> Result<()>;

    /// Load `url` as a new document
    fn assign(&self, url: &str) -> Result<()>;

    fn add_event_listener(&self, event_type: &str, listener: EventListener);

    fn remove_event_listener(&self, event_type: &str, listener: &EventListener);

    /// Deliver `event` to every platform listener for its type
    fn dispatch_event(&self, event: &NavigationEvent);

    /// Mark the History API of this page as patched. Returns false if it
    /// already was.
    fn claim_patch(&self) -> bool;
}
