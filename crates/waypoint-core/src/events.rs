//! Router lifecycle events

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use waypoint_location::Location;

/// Match data carried by every router lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPayload {
    pub location: Location,
    /// Matched URL parameters, flattened across the route chain.
    #[serde(default)]
    pub params: HashMap<String, String>,
    /// Matched route chain, root to leaf. `None` means the router found no
    /// match; whether that is an error depends on the event context.
    #[serde(default)]
    pub route_indices: Option<Vec<usize>>,
    /// Matched parameters per route in the chain.
    #[serde(default)]
    pub route_params: Vec<HashMap<String, String>>,
}

impl MatchPayload {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            params: HashMap::new(),
            route_indices: None,
            route_params: Vec::new(),
        }
    }

    pub fn with_route_indices(mut self, route_indices: Vec<usize>) -> Self {
        self.route_indices = Some(route_indices);
        self
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_route_params(mut self, route_params: Vec<HashMap<String, String>>) -> Self {
        self.route_params = route_params;
        self
    }
}

/// Events consumed from the host router, in the order it guarantees:
/// one started event per navigation attempt, then at most one resolved
/// event, before the next attempt's started event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RouterEvent {
    /// Navigation begins.
    NavigationStarted(MatchPayload),
    /// Navigation finished resolving; the new page is about to render.
    NavigationResolved(MatchPayload),
    /// Host-synthesized equivalent of [`RouterEvent::NavigationResolved`],
    /// used when the router is known to skip emitting one for first render.
    ResolvedFallback(MatchPayload),
}

impl RouterEvent {
    pub fn payload(&self) -> &MatchPayload {
        match self {
            RouterEvent::NavigationStarted(payload)
            | RouterEvent::NavigationResolved(payload)
            | RouterEvent::ResolvedFallback(payload) => payload,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RouterEvent::NavigationStarted(_) => "navigation-started",
            RouterEvent::NavigationResolved(_) => "navigation-resolved",
            RouterEvent::ResolvedFallback(_) => "resolved-fallback",
        }
    }
}
