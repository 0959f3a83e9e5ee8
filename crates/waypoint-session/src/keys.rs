//! Session key namespace

use serde::{Deserialize, Serialize};

/// Fixed namespace of recognized navigation-session keys.
///
/// Lifecycle is process-wide: a key holds its value until the controller
/// (or, for its own one-shot keys, the render layer) explicitly clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKey {
    /// Sticky: the application has rendered at least once.
    HasRendered,
    /// Sticky: page metadata has been applied at least once.
    InitialMetaApplied,
    /// Whether the navigation currently being handled was served instantly.
    InstantNavigation,
    /// One-shot, set while an instant(-back) navigation is in flight;
    /// suppresses the loading indicator. Cleared when the navigation resolves.
    InstantBack,
    /// One-shot marker armed by an instant-back-capable link (or programmatic
    /// navigation) just before the router event fires.
    InstantBackMarker,
    /// One-shot: swallow the next resolve event (redirect-then-Back quirk).
    IgnoreNextResolve,
    /// Arbitrary host data attached to the navigation in flight.
    NavigationContext,
    /// Route indices of the most recently resolved navigation.
    PreviousRoutes,
    /// Per-route matched parameters of the most recently resolved navigation.
    PreviousRouteParams,
    /// Started-event payload stashed before first render, for the host to
    /// synthesize a resolve event the router never emits for first render.
    PendingFirstResolvePayload,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::HasRendered => "app/has-rendered",
            SessionKey::InitialMetaApplied => "app/initial-meta-applied",
            SessionKey::InstantNavigation => "navigation/instant",
            SessionKey::InstantBack => "navigation/instant-back",
            SessionKey::InstantBackMarker => "navigation/instant-back-marker",
            SessionKey::IgnoreNextResolve => "navigation/ignore-next-resolve",
            SessionKey::NavigationContext => "navigation/context",
            SessionKey::PreviousRoutes => "navigation/previous-routes",
            SessionKey::PreviousRouteParams => "navigation/previous-route-params",
            SessionKey::PendingFirstResolvePayload => "navigation/pending-first-resolve",
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
