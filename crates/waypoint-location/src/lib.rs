//! Waypoint Location Types
//!
//! Value types shared by every navigation component: the [`Location`]
//! produced by the host router for each history entry, and the
//! [`NavAction`] describing how that entry was reached.

mod action;
mod location;

pub use action::NavAction;
pub use location::Location;
