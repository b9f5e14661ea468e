//! Navigation targets
//!
//! A navigation can be requested with a plain URL, from a link element's `href`,
//! or from a click on a link, in which case the browser's default navigation is
//! suppressed before routing takes over.

use serde_json::Value;
use std::fmt;

use crate::error::NavigationError;

/// A click on a link whose default action must be cancelled
pub struct LinkClick {
    href: String,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl LinkClick {
    pub fn new<F>(href: impl Into<String>, prevent_default: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            href: href.into(),
            cancel: Some(Box::new(prevent_default)),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Cancel the default action. Only the first call has an effect.
    pub fn prevent_default(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.cancel.is_none()
    }
}

impl fmt::Debug for LinkClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkClick")
            .field("href", &self.href)
            .field("default_prevented", &self.default_prevented())
            .finish()
    }
}

#[derive(Debug)]
pub enum NavigationTarget {
    /// A URL string, absolute or relative to the current document
    Url(String),
    /// The `href` of a link element used as the calling context
    Link { href: String },
    /// A click event on a link
    Event(LinkClick),
}

impl NavigationTarget {
    pub fn link(href: impl Into<String>) -> Self {
        NavigationTarget::Link { href: href.into() }
    }

    pub fn event<F>(href: impl Into<String>, prevent_default: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        NavigationTarget::Event(LinkClick::new(href, prevent_default))
    }

    pub fn href(&self) -> &str {
        match self {
            NavigationTarget::Url(url) => url,
            NavigationTarget::Link { href } => href,
            NavigationTarget::Event(click) => click.href(),
        }
    }

    /// Consume the target and return the URL to navigate to.
    ///
    /// Event targets have their default action cancelled first.
    pub fn into_url(self) -> String {
        match self {
            NavigationTarget::Url(url) => url,
            NavigationTarget::Link { href } => href,
            NavigationTarget::Event(mut click) => {
                click.prevent_default();
                click.href
            }
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(url: &str) -> Self {
        NavigationTarget::Url(url.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(url: String) -> Self {
        NavigationTarget::Url(url)
    }
}

impl From<LinkClick> for NavigationTarget {
    fn from(click: LinkClick) -> Self {
        NavigationTarget::Event(click)
    }
}

/// Adapter for loosely shaped input, such as values handed over from script
/// or markup.
///
/// A string is a URL and an object with a string `href` is a link. Event-shaped
/// objects carry no way to cancel their default action here and are rejected;
/// build those with [`NavigationTarget::event`].
impl TryFrom<Value> for NavigationTarget {
    type Error = NavigationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(url) => Ok(NavigationTarget::Url(url)),
            Value::Object(mut fields) => {
                if let Some(Value::String(href)) = fields.remove("href") {
                    return Ok(NavigationTarget::Link { href });
                }
                if fields.contains_key("currentTarget") {
                    return Err(NavigationError::InvalidArgument(
                        "event targets need a prevent_default handle".to_string(),
                    ));
                }
                Err(NavigationError::InvalidArgument(
                    "object has no string href".to_string(),
                ))
            }
            other => Err(NavigationError::InvalidArgument(format!(
                "expected a string url, a link, or a click event, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_event_prevents_default_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut click = LinkClick::new("/x", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!click.default_prevented());
        click.prevent_default();
        click.prevent_default();
        assert!(click.default_prevented());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_into_url() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let target = NavigationTarget::event("/x", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(target.href(), "/x");
        assert_eq!(target.into_url(), "/x");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(NavigationTarget::link("/y").into_url(), "/y");
        assert_eq!(NavigationTarget::from("/z").into_url(), "/z");
    }

    #[test]
    fn test_from_value() {
        match NavigationTarget::try_from(json!("/a")).unwrap() {
            NavigationTarget::Url(url) => assert_eq!(url, "/a"),
            other => panic!("Expected Url, got {:?}", other),
        }

        match NavigationTarget::try_from(json!({ "href": "/b" })).unwrap() {
            NavigationTarget::Link { href } => assert_eq!(href, "/b"),
            other => panic!("Expected Link, got {:?}", other),
        }
    }

    #[test]
    fn test_from_value_rejects_unknown_shapes() {
        for value in [
            json!(null),
            json!(42),
            json!({ "href": 7 }),
            json!({ "currentTarget": { "href": "/x" } }),
            json!(["/x"]),
        ] {
            assert!(matches!(
                NavigationTarget::try_from(value),
                Err(NavigationError::InvalidArgument(_))
            ));
        }
    }
}
