//! Configuration-supplied hooks

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use waypoint_location::Location;

use crate::state::{StateAccess, StateSink};

/// Arguments to the `on_before_navigate` hook, invoked while a navigation
/// is starting, before any loading state is dispatched.
pub struct BeforeNavigateArgs<'a> {
    pub dispatch: &'a dyn StateSink,
    pub state: &'a dyn StateAccess,
    pub location: &'a Location,
    pub params: &'a HashMap<String, String>,
    pub app_context: Option<&'a Value>,
}

/// Arguments to the `on_navigate` hook, invoked once a navigation resolves.
pub struct NavigateArgs<'a> {
    pub url: &'a str,
    pub location: &'a Location,
    pub params: &'a HashMap<String, String>,
    pub app_context: Option<&'a Value>,
    pub dispatch: &'a dyn StateSink,
    pub state: &'a dyn StateAccess,
}

/// Arguments to a leaf route's `on_loaded` hook.
pub struct PageLoadedArgs<'a> {
    pub dispatch: &'a dyn StateSink,
    pub state: &'a dyn StateAccess,
    pub location: &'a Location,
}

/// Per-navigation timing report.
#[derive(Debug, Clone)]
pub struct NavigationStats {
    pub url: String,
    /// Concatenated route path, e.g. `/users/:user_id/posts/:post_id`.
    pub route_path: String,
    /// Time from the started event to the resolved event, covering both
    /// data load and render.
    pub load_and_render: Duration,
    pub at: DateTime<Utc>,
}

pub type BeforeNavigateHook = Box<dyn Fn(BeforeNavigateArgs<'_>) + Send + Sync>;
pub type NavigateHook = Box<dyn Fn(NavigateArgs<'_>) + Send + Sync>;
pub type StatsHook = Box<dyn Fn(&NavigationStats) + Send + Sync>;

/// Shared so routes stay cloneable.
pub type OnLoadedHook = Arc<dyn Fn(PageLoadedArgs<'_>) + Send + Sync>;
