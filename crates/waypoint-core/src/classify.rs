//! Transition classification
//!
//! Pure decision logic: given the previous and new locations, the instant
//! navigation chain, and the one-shot instant-back marker, decide how a
//! transition should be served and whether the event can be skipped
//! entirely.

use waypoint_location::{Location, NavAction};

use crate::chain::InstantNavigationChain;

/// How a transition is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A POP back/forward onto a page that is still loaded; no data load.
    Instant,
    /// A forward navigation explicitly marked instant-back-capable.
    InstantBack,
    /// Everything else: full data load.
    Regular,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Instant => "instant",
            Transition::InstantBack => "instant-back",
            Transition::Regular => "regular",
        }
    }

    /// Instant in either direction; suppresses the loading indicator.
    pub fn is_instant(&self) -> bool {
        matches!(self, Transition::Instant | Transition::InstantBack)
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anchor-link navigation: same pathname and query, and only the fragment
/// actually changed. The upstream router emits duplicate lifecycle events
/// for these, so the whole event is skipped. A re-navigation to the exact
/// same URL (hashes equal) is NOT an anchor change and must be processed.
/// Known limitation: the shim does not protect code-split configurations,
/// which bypass the global loader.
pub fn should_skip_load(previous_location: &Location, location: &Location) -> bool {
    previous_location.same_ignoring_hash(location) && previous_location.hash != location.hash
}

/// Classify a transition. The instant-back marker, having been armed
/// explicitly before navigation, takes priority over chain-derived
/// instant classification so loading suppression fires once, not twice.
pub fn classify(
    previous_location: Option<&Location>,
    location: &Location,
    chain: &InstantNavigationChain,
    instant_back_marked: bool,
) -> Transition {
    if instant_back_marked && previous_location.is_some() {
        Transition::InstantBack
    } else if location.action == NavAction::Pop
        && previous_location
            .map(|previous| chain.is_instant_transition(previous, location))
            .unwrap_or(false)
    {
        Transition::Instant
    } else {
        Transition::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(pathname: &str, action: NavAction) -> Location {
        Location::new(pathname, action)
    }

    fn chain_with(previous: &str, current: &str) -> InstantNavigationChain {
        let mut chain = InstantNavigationChain::new();
        chain.add_instant_back(
            location(current, NavAction::Push),
            location(previous, NavAction::Push),
            vec![1],
            vec![0],
        );
        chain
    }

    #[test]
    fn test_pop_within_chain_is_instant() {
        let chain = chain_with("/a", "/b");
        let previous = location("/b", NavAction::Push);
        let target = location("/a", NavAction::Pop);

        assert_eq!(
            classify(Some(&previous), &target, &chain, false),
            Transition::Instant
        );
    }

    #[test]
    fn test_push_is_never_instant() {
        let chain = chain_with("/a", "/b");
        let previous = location("/b", NavAction::Push);
        let target = location("/a", NavAction::Push);

        assert_eq!(
            classify(Some(&previous), &target, &chain, false),
            Transition::Regular
        );
    }

    #[test]
    fn test_marker_wins_over_chain_classification() {
        let chain = chain_with("/a", "/b");
        let previous = location("/b", NavAction::Push);
        let target = location("/a", NavAction::Pop);

        assert_eq!(
            classify(Some(&previous), &target, &chain, true),
            Transition::InstantBack
        );
    }

    #[test]
    fn test_marker_without_previous_location_is_regular() {
        let chain = InstantNavigationChain::new();
        let target = location("/a", NavAction::Push);

        assert_eq!(
            classify(None, &target, &chain, true),
            Transition::Regular
        );
    }

    #[test]
    fn test_anchor_navigation_skips_load() {
        let previous = location("/a", NavAction::Push);
        let mut target = location("/a", NavAction::Push);
        target.hash = "#section".to_string();

        assert!(should_skip_load(&previous, &target));

        // Leaving a fragment is also an anchor-only change.
        assert!(should_skip_load(&target, &previous));
    }

    #[test]
    fn test_identical_url_is_not_an_anchor_change() {
        // Re-clicking a link to the current page: hashes are equal (both
        // empty), so the navigation must be processed, not skipped.
        let previous = location("/a", NavAction::Push);
        let target = location("/a", NavAction::Push);
        assert!(!should_skip_load(&previous, &target));

        let mut at_anchor = location("/a", NavAction::Push);
        at_anchor.hash = "#section".to_string();
        assert!(!should_skip_load(&at_anchor, &at_anchor.clone()));
    }

    #[test]
    fn test_different_query_is_not_an_anchor_change() {
        let previous = location("/a", NavAction::Push);
        let mut target = location("/a", NavAction::Push);
        target.search = "?q=1".to_string();
        target.hash = "#section".to_string();
        assert!(!should_skip_load(&previous, &target));
    }

    #[test]
    fn test_empty_chain_pop_is_regular() {
        let chain = InstantNavigationChain::new();
        let previous = location("/a", NavAction::Push);
        let target = location("/b", NavAction::Pop);

        assert_eq!(
            classify(Some(&previous), &target, &chain, false),
            Transition::Regular
        );
    }
}
