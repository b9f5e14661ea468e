//! Routing configuration

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

const URL_REROUTE_ONLY_VAR: &str = "TRELLIS_URL_REROUTE_ONLY";
const TEST_MODE_VAR: &str = "TRELLIS_TEST_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingOptions {
    /// Skip the synthetic `popstate` when a history update leaves the URL
    /// unchanged
    pub url_reroute_only: bool,
    /// Report cross-origin navigations instead of loading the page
    pub test_mode: bool,
}

impl RoutingOptions {
    /// Options from `TRELLIS_URL_REROUTE_ONLY` and `TRELLIS_TEST_MODE`.
    /// Unset or unreadable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let flag = |name: &str, default: bool| match lookup(name) {
            None => default,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|e| {
                tracing::warn!(variable = name, "{}; using {}", e, default);
                default
            }),
        };

        Self {
            url_reroute_only: flag(URL_REROUTE_ONLY_VAR, defaults.url_reroute_only),
            test_mode: flag(TEST_MODE_VAR, defaults.test_mode),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            url_reroute_only: true,
            test_mode: false,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(CoreError::Config(format!("Not a boolean: {}", other))),
    }
}
