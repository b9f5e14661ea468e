//! URL decomposition
//!
//! Mirrors the parts of a browser `Location` that navigation decisions look at.
//! Relative inputs are resolved against the current document URL with the same
//! WHATWG rules the browser uses.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    /// Fully resolved URL
    pub href: String,
    /// Hostname plus non-default port, empty for host-less URLs
    pub host: String,
    pub pathname: String,
    /// Query including the leading `?`, or empty
    pub search: String,
    /// Fragment including the leading `#`, or empty
    pub hash: String,
}

impl UrlParts {
    pub fn from_url(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };

        Self {
            href: url.as_str().to_string(),
            host,
            pathname: url.path().to_string(),
            search: prefixed('?', url.query()),
            hash: prefixed('#', url.fragment()),
        }
    }
}

// An empty query or fragment reads back as "" from a browser Location.
fn prefixed(marker: char, part: Option<&str>) -> String {
    match part {
        Some(part) if !part.is_empty() => format!("{}{}", marker, part),
        _ => String::new(),
    }
}

/// Resolve `input` against `base` and decompose the result
pub fn resolve_url(base: &str, input: &str) -> Result<UrlParts> {
    let base =
        Url::parse(base).map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", base, e)))?;
    let url = base
        .join(input)
        .map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", input, e)))?;

    Ok(UrlParts::from_url(&url))
}
