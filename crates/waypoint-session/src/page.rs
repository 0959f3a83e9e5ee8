//! Page snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use waypoint_location::Location;

/// Snapshot of the page a navigation resolved to, as handed to the
/// before-render listeners.
///
/// `instant_back` and `navigation_context` are captured in the same lock
/// acquisition that makes the page current. They must never be re-read from
/// the live session afterwards: a fast subsequent navigation may have
/// overwritten the flags by the time a listener runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub location: Location,
    /// Concatenated route path, e.g. `/users/:user_id/posts/:post_id`.
    pub route_path: String,
    pub params: HashMap<String, String>,
    /// Whether this page can be returned to instantly via Back.
    pub instant_back: bool,
    /// Host data attached to the navigation that produced this page.
    pub navigation_context: Option<Value>,
}
