//! Navigation events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event types that are captured and replayed instead of delivered directly.
///
/// Lifecycle controllers use this exact set to decide whether captured
/// listeners need to be called for an event.
pub const ROUTING_EVENT_KINDS: [&str; 2] = ["hashchange", "popstate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingEventKind {
    HashChange,
    PopState,
}

impl RoutingEventKind {
    pub const ALL: [RoutingEventKind; 2] =
        [RoutingEventKind::HashChange, RoutingEventKind::PopState];

    /// Look up a routing kind by DOM event type. Every other type is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hashchange" => Some(RoutingEventKind::HashChange),
            "popstate" => Some(RoutingEventKind::PopState),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingEventKind::HashChange => "hashchange",
            RoutingEventKind::PopState => "popstate",
        }
    }
}

impl std::fmt::Display for RoutingEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoutingEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Not a routing event: {}", s))
    }
}

/// History API method that produced a synthetic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryMethod {
    #[serde(rename = "pushState")]
    PushState,
    #[serde(rename = "replaceState")]
    ReplaceState,
}

impl HistoryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMethod::PushState => "pushState",
            HistoryMethod::ReplaceState => "replaceState",
        }
    }
}

impl std::fmt::Display for HistoryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum EventOrigin {
    /// Fired by the platform itself
    Native,
    /// Manufactured after a history update, which the platform never reports
    Synthetic { trigger: HistoryMethod },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    /// DOM event type, e.g. `popstate`
    #[serde(rename = "type")]
    pub event_type: String,
    /// History state at the time the event fired
    pub state: Value,
    pub origin: EventOrigin,
    pub time_stamp: DateTime<Utc>,
}

impl NavigationEvent {
    /// A platform event of any type
    pub fn new(event_type: impl Into<String>, state: Value) -> Self {
        Self {
            event_type: event_type.into(),
            state,
            origin: EventOrigin::Native,
            time_stamp: Utc::now(),
        }
    }

    pub fn native(kind: RoutingEventKind, state: Value) -> Self {
        Self::new(kind.as_str(), state)
    }

    /// A `popstate` standing in for a history update.
    ///
    /// `pushState` updates are reported as `popstate` too, since applications
    /// listen for history changes through that one event type.
    pub fn synthetic(state: Value, trigger: HistoryMethod) -> Self {
        Self {
            event_type: RoutingEventKind::PopState.as_str().to_string(),
            state,
            origin: EventOrigin::Synthetic { trigger },
            time_stamp: Utc::now(),
        }
    }

    pub fn routing_kind(&self) -> Option<RoutingEventKind> {
        RoutingEventKind::from_name(&self.event_type)
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, EventOrigin::Synthetic { .. })
    }

    pub fn trigger(&self) -> Option<HistoryMethod> {
        match self.origin {
            EventOrigin::Synthetic { trigger } => Some(trigger),
            EventOrigin::Native => None,
        }
    }
}
