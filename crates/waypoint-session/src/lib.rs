//! Waypoint Navigation Session
//!
//! An explicit, passed-down [`NavigationSession`] object replacing the kind
//! of process-global context store navigation layers tend to grow. It holds
//! the transient navigation flags and snapshots (with get/set/clear/take
//! semantics over a fixed key namespace) and the listener registry with
//! explicit persistent vs consume-once subscription kinds.

mod keys;
mod listeners;
mod page;
mod session;

pub use keys::SessionKey;
pub use listeners::{
    ListenerKind, ListenerRegistry, NavigationListener, PageListener, PageOnceListener,
    SubscriptionKind,
};
pub use page::Page;
pub use session::NavigationSession;
