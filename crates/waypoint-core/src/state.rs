//! State updates dispatched to the host

use serde::{Deserialize, Serialize};
use serde_json::Value;

use waypoint_location::Location;

/// Updates the controller dispatches to the host's state/render layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateUpdate {
    /// A navigation is in flight toward this location.
    SetPendingLocation { location: Location },
    /// Show the page loading indicator.
    LoadingStarted { location: Location },
    /// Hide the page loading indicator.
    LoadingFinished,
}

/// Receiver for dispatched state updates.
pub trait StateSink {
    fn dispatch(&self, update: StateUpdate);
}

/// Read access to the host's application state, handed to hooks and the
/// metadata collaborator.
pub trait StateAccess {
    fn current(&self) -> Value;
}
