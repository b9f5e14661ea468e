//! In-memory navigation host
//!
//! Behaves like a single browser tab without a document: a history stack with a
//! cursor, a listener registry per event type, and a log of full page loads in
//! place of actually unloading anything. Events are delivered synchronously.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

use crate::error::EventError;
use crate::event::{NavigationEvent, RoutingEventKind};
use crate::host::NavigationHost;
use crate::listener::EventListener;
use crate::Result;

#[derive(Debug, Clone)]
struct Entry {
    url: Url,
    state: Value,
}

#[derive(Debug)]
struct Session {
    entries: Vec<Entry>,
    index: usize,
    page_loads: Vec<String>,
}

impl Session {
    fn current(&self) -> &Entry {
        &self.entries[self.index]
    }

    fn resolve(&self, url: &str) -> Result<Url> {
        self.current()
            .url
            .join(url)
            .map_err(|e| EventError::InvalidUrl(format!("{}: {}", url, e)))
    }

    // The History API refuses to point an entry at another origin.
    fn resolve_same_origin(&self, url: Option<&str>) -> Result<Url> {
        let current = &self.current().url;
        let Some(url) = url else {
            return Ok(current.clone());
        };

        let resolved = self.resolve(url)?;
        if resolved.origin() != current.origin() {
            return Err(EventError::CrossOrigin(resolved.to_string()));
        }
        Ok(resolved)
    }
}

pub struct MemoryHost {
    session: RwLock<Session>,
    listeners: RwLock<HashMap<String, Vec<EventListener>>>,
    patched: AtomicBool,
}

impl MemoryHost {
    pub fn new(initial_url: &str) -> Result<Self> {
        let url = Url::parse(initial_url)
            .map_err(|e| EventError::InvalidUrl(format!("{}: {}", initial_url, e)))?;

        Ok(Self {
            session: RwLock::new(Session {
                entries: vec![Entry {
                    url,
                    state: Value::Null,
                }],
                index: 0,
                page_loads: Vec::new(),
            }),
            listeners: RwLock::new(HashMap::new()),
            patched: AtomicBool::new(false),
        })
    }

    /// Number of entries in the history stack
    pub fn history_len(&self) -> usize {
        self.session.read().entries.len()
    }

    /// URLs loaded as new documents, oldest first
    pub fn page_loads(&self) -> Vec<String> {
        self.session.read().page_loads.clone()
    }

    /// Number of platform listeners registered for `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.read().get(event_type).map_or(0, Vec::len)
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Traverse the history stack by `delta` entries, firing `popstate` (and
    /// `hashchange` when only the fragment differs). Returns false if the
    /// target entry does not exist.
    pub fn go(&self, delta: isize) -> bool {
        let (from, to) = {
            let mut session = self.session.write();
            let target = match (session.index as isize).checked_add(delta) {
                Some(target) if delta != 0 && target >= 0 => target as usize,
                _ => return false,
            };
            if target >= session.entries.len() {
                return false;
            }

            let from = session.current().url.clone();
            session.index = target;
            (from, session.current().clone())
        };

        tracing::debug!(from = %from, to = %to.url, "History traversal");

        self.dispatch_event(&NavigationEvent::native(
            RoutingEventKind::PopState,
            to.state,
        ));

        let fragment_only = from.fragment() != to.url.fragment()
            && without_fragment(&from) == without_fragment(&to.url);
        if fragment_only {
            self.dispatch_event(&NavigationEvent::native(
                RoutingEventKind::HashChange,
                Value::Null,
            ));
        }

        true
    }
}

fn without_fragment(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}

impl NavigationHost for MemoryHost {
    fn href(&self) -> String {
        self.session.read().current().url.to_string()
    }

    fn history_state(&self) -> Value {
        self.session.read().current().state.clone()
    }

    fn push_state(&self, state: Value, _title: &str, url: Option<&str>) -> Result<()> {
        let mut session = self.session.write();
        let url = session.resolve_same_origin(url)?;

        let next = session.index + 1;
        session.entries.truncate(next);
        session.entries.push(Entry { url, state });
        session.index = next;
        Ok(())
    }

    fn replace_state(&self, state: Value, _title: &str, url: Option<&str>) -> Result<()> {
        let mut session = self.session.write();
        let url = session.resolve_same_origin(url)?;

        let index = session.index;
        session.entries[index] = Entry { url, state };
        Ok(())
    }

    // The fragment is updated on the current entry; no entry is added.
    fn set_hash(&self, hash: &str) -> Result<()> {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);

        let changed = {
            let mut session = self.session.write();
            let index = session.index;
            let url = &mut session.entries[index].url;

            let before = url.fragment().map(str::to_string);
            if fragment.is_empty() && before.is_none() {
                false
            } else {
                url.set_fragment(Some(fragment));
                before.as_deref() != Some(fragment)
            }
        };

        if changed {
            self.dispatch_event(&NavigationEvent::native(
                RoutingEventKind::HashChange,
                Value::Null,
            ));
        }
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<()> {
        let mut session = self.session.write();
        let url = session.resolve(url)?;

        tracing::info!(url = %url, "Full page load");

        session.page_loads.push(url.to_string());
        let next = session.index + 1;
        session.entries.truncate(next);
        session.entries.push(Entry {
            url,
            state: Value::Null,
        });
        session.index = next;
        Ok(())
    }

    fn add_event_listener(&self, event_type: &str, listener: EventListener) {
        let mut listeners = self.listeners.write();
        let registered = listeners.entry(event_type.to_string()).or_default();
        if !registered.iter().any(|l| l.same_as(&listener)) {
            registered.push(listener);
        }
    }

    fn remove_event_listener(&self, event_type: &str, listener: &EventListener) {
        if let Some(registered) = self.listeners.write().get_mut(event_type) {
            registered.retain(|l| !l.same_as(listener));
        }
    }

    fn dispatch_event(&self, event: &NavigationEvent) {
        let snapshot = self
            .listeners
            .read()
            .get(&event.event_type)
            .cloned()
            .unwrap_or_default();

        for listener in snapshot {
            if let Err(e) = listener.call_isolated(event) {
                tracing::error!(
                    event_type = %event.event_type,
                    "Uncaught error in event listener: {:#}",
                    e
                );
            }
        }
    }

    fn claim_patch(&self) -> bool {
        !self.patched.swap(true, Ordering::AcqRel)
    }
}
