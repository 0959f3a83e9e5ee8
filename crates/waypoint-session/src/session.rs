//! Navigation session
//!
//! Shared state between the navigation controller and the render layer.
//! The controller writes the navigation-lifecycle keys; the render layer
//! reads them and consumes its own one-shot keys. All mutation happens
//! behind one lock, so a multi-threaded host gets serialized access for
//! free; listeners are cloned out of the lock before firing so a listener
//! may safely touch the session again.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use waypoint_location::Location;

use crate::keys::SessionKey;
use crate::listeners::{ListenerKind, ListenerRegistry};
use crate::page::Page;

#[derive(Default)]
struct SessionInner {
    values: HashMap<SessionKey, Value>,
    current_page: Option<Page>,
    listeners: ListenerRegistry,
}

/// Process-wide navigation state, passed down explicitly instead of living
/// in a global. Cheap to clone; clones share the same underlying state.
#[derive(Clone, Default)]
pub struct NavigationSession {
    inner: Arc<RwLock<SessionInner>>,
}

impl NavigationSession {
    pub fn new() -> Self {
        Self::default()
    }

    // === Key/value store ===

    pub fn get(&self, key: SessionKey) -> Option<Value> {
        self.inner.read().values.get(&key).cloned()
    }

    pub fn set(&self, key: SessionKey, value: Value) {
        self.inner.write().values.insert(key, value);
    }

    pub fn clear(&self, key: SessionKey) {
        self.inner.write().values.remove(&key);
    }

    /// Get-then-clear in a single lock acquisition.
    pub fn take(&self, key: SessionKey) -> Option<Value> {
        self.inner.write().values.remove(&key)
    }

    fn flag(&self, key: SessionKey) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }

    fn set_flag(&self, key: SessionKey) {
        self.set(key, Value::Bool(true));
    }

    fn take_flag(&self, key: SessionKey) -> bool {
        matches!(self.take(key), Some(Value::Bool(true)))
    }

    // === Lifecycle flags ===

    /// Sticky, idempotent: the app has rendered at least once.
    pub fn mark_rendered(&self) {
        self.set_flag(SessionKey::HasRendered);
    }

    pub fn has_rendered(&self) -> bool {
        self.flag(SessionKey::HasRendered)
    }

    /// Sticky, idempotent: metadata has been applied at least once.
    pub fn mark_initial_meta_applied(&self) {
        self.set_flag(SessionKey::InitialMetaApplied);
    }

    pub fn initial_meta_applied(&self) -> bool {
        self.flag(SessionKey::InitialMetaApplied)
    }

    /// Record whether the navigation being handled was served instantly.
    pub fn set_instant_navigation(&self, instant: bool) {
        self.set(SessionKey::InstantNavigation, Value::Bool(instant));
    }

    /// Render-layer query: was the last navigation served instantly?
    pub fn was_instant_navigation(&self) -> bool {
        self.flag(SessionKey::InstantNavigation)
    }

    /// One-shot loading-suppression flag for an instant(-back) navigation
    /// in flight. Cleared by the controller when the navigation resolves.
    pub fn set_instant_back(&self) {
        self.set_flag(SessionKey::InstantBack);
    }

    pub fn is_instant_back_navigation(&self) -> bool {
        self.flag(SessionKey::InstantBack)
    }

    pub fn clear_instant_back(&self) {
        self.clear(SessionKey::InstantBack);
    }

    /// Arm the one-shot instant-back marker. Called by an instant-back
    /// capable link (or programmatic navigation) right before the router
    /// event fires; consumed during classification.
    pub fn mark_instant_back_navigation(&self) {
        self.set_flag(SessionKey::InstantBackMarker);
    }

    pub fn take_instant_back_marker(&self) -> bool {
        self.take_flag(SessionKey::InstantBackMarker)
    }

    /// Arm the suppression of the next resolve event. Hosts call this when
    /// performing a redirect whose Back navigation is known to produce a
    /// duplicate resolve with no matched route chain.
    pub fn set_ignore_next_resolve(&self) {
        self.set_flag(SessionKey::IgnoreNextResolve);
    }

    pub fn take_ignore_next_resolve(&self) -> bool {
        self.take_flag(SessionKey::IgnoreNextResolve)
    }

    /// Attach host data to the navigation in flight. Snapshotted into the
    /// [`Page`] when the new route becomes current.
    pub fn set_navigation_context(&self, context: Value) {
        self.set(SessionKey::NavigationContext, context);
    }

    pub fn navigation_context(&self) -> Option<Value> {
        self.get(SessionKey::NavigationContext)
    }

    pub fn clear_navigation_context(&self) {
        self.clear(SessionKey::NavigationContext);
    }

    // === Listeners ===

    pub fn on_navigation_start(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.inner
            .write()
            .listeners
            .add_navigation_start(Arc::new(listener));
    }

    pub fn on_navigation_end(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.inner
            .write()
            .listeners
            .add_navigation_end(Arc::new(listener));
    }

    pub fn on_before_render_new_page(
        &self,
        listener: impl Fn(&Page, Option<&Page>) + Send + Sync + 'static,
    ) {
        self.inner
            .write()
            .listeners
            .add_before_render_new_page(Arc::new(listener));
    }

    /// Consume-once: fires on the next page change only.
    pub fn on_before_render_another_page(&self, listener: impl Fn(&Page) + Send + Sync + 'static) {
        self.inner
            .write()
            .listeners
            .add_before_render_another_page(Arc::new(listener));
    }

    pub fn remove_listeners(&self, kind: ListenerKind) {
        self.inner.write().listeners.remove_all(kind);
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.inner.read().listeners.count(kind)
    }

    /// Fire navigation-start listeners in registration order.
    pub fn notify_navigation_start(&self) {
        let listeners = self.inner.read().listeners.navigation_start_listeners();
        for listener in listeners {
            listener();
        }
    }

    /// Fire navigation-end listeners in registration order.
    pub fn notify_navigation_end(&self) {
        let listeners = self.inner.read().listeners.navigation_end_listeners();
        for listener in listeners {
            listener();
        }
    }

    // === Page announcements ===

    /// Make a newly resolved route the current page.
    ///
    /// The instant-back flag and navigation context are snapshotted into the
    /// [`Page`] in the same lock acquisition that swaps the current page, so
    /// listeners observe the values belonging to this navigation even when
    /// another navigation starts immediately after. Fires the persistent
    /// before-render-new-page listeners with (new, previous), then takes and
    /// fires the consume-once before-render-another-page listeners.
    pub fn announce_page(
        &self,
        location: Location,
        route_path: String,
        params: HashMap<String, String>,
    ) -> Page {
        let (page, previous, persistent, once) = {
            let mut inner = self.inner.write();

            let instant_back =
                matches!(inner.values.get(&SessionKey::InstantBack), Some(Value::Bool(true)));
            let navigation_context = inner.values.get(&SessionKey::NavigationContext).cloned();

            let page = Page {
                location,
                route_path,
                params,
                instant_back,
                navigation_context,
            };

            let previous = inner.current_page.replace(page.clone());
            let persistent = inner.listeners.before_render_new_page_listeners();
            let once = inner.listeners.take_before_render_another_page();

            (page, previous, persistent, once)
        };

        tracing::debug!(path = %page.location.pathname, "page became current");

        for listener in persistent {
            listener(&page, previous.as_ref());
        }
        for listener in once {
            listener(&page);
        }

        page
    }

    pub fn current_page(&self) -> Option<Page> {
        self.inner.read().current_page.clone()
    }
}
