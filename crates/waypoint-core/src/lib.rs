//! Waypoint Core
//!
//! Client-side navigation orchestration: consumes router lifecycle events
//! and manages loading state, instant back/forward transitions, page
//! metadata refresh, navigation hooks, and per-navigation stats.

mod chain;
mod classify;
mod config;
mod controller;
mod error;
mod events;
mod hooks;
mod meta;
mod routes;
mod state;

pub use chain::{ChainEntry, InstantNavigationChain};
pub use classify::{classify, should_skip_load, Transition};
pub use config::NavigationOptions;
pub use controller::NavigationController;
pub use error::NavigationError;
pub use events::{MatchPayload, RouterEvent};
pub use hooks::{
    BeforeNavigateArgs, BeforeNavigateHook, NavigateArgs, NavigateHook, NavigationStats,
    OnLoadedHook, PageLoadedArgs, StatsHook,
};
pub use meta::{MetadataRefresher, NoopMetadata};
pub use routes::{Route, Routes};
pub use state::{StateAccess, StateSink, StateUpdate};

// Re-export the companion crates
pub use waypoint_location::{Location, NavAction};
pub use waypoint_session::{
    ListenerKind, NavigationSession, Page, SessionKey, SubscriptionKind,
};

pub type Result<T> = std::result::Result<T, NavigationError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
