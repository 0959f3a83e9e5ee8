//! Listener registry
//!
//! Typed event registry for the navigation lifecycle. Each event kind has an
//! explicit subscription kind: persistent listeners fire on every occurrence,
//! consume-once listeners are removed as they fire and therefore fire exactly
//! once per registration regardless of how many renders happen in between.

use std::sync::Arc;

use crate::page::Page;

/// Callback for navigation start/end events. Takes no arguments.
pub type NavigationListener = Arc<dyn Fn() + Send + Sync>;

/// Callback fired before a new page renders, with the previous page if any.
pub type PageListener = Arc<dyn Fn(&Page, Option<&Page>) + Send + Sync>;

/// Consume-once callback fired before another page renders.
pub type PageOnceListener = Arc<dyn Fn(&Page) + Send + Sync>;

/// Navigation lifecycle event kinds listeners can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    NavigationStart,
    NavigationEnd,
    BeforeRenderNewPage,
    BeforeRenderAnotherPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionKind {
    /// Fires on every occurrence until removed.
    Persistent,
    /// Fires once, then the registration is gone.
    ConsumeOnce,
}

impl ListenerKind {
    pub fn subscription(&self) -> SubscriptionKind {
        match self {
            ListenerKind::NavigationStart
            | ListenerKind::NavigationEnd
            | ListenerKind::BeforeRenderNewPage => SubscriptionKind::Persistent,
            ListenerKind::BeforeRenderAnotherPage => SubscriptionKind::ConsumeOnce,
        }
    }
}

/// Ordered listener lists per event kind. Registration order is firing order.
#[derive(Default)]
pub struct ListenerRegistry {
    navigation_start: Vec<NavigationListener>,
    navigation_end: Vec<NavigationListener>,
    before_render_new_page: Vec<PageListener>,
    before_render_another_page: Vec<PageOnceListener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_navigation_start(&mut self, listener: NavigationListener) {
        self.navigation_start.push(listener);
    }

    pub fn add_navigation_end(&mut self, listener: NavigationListener) {
        self.navigation_end.push(listener);
    }

    pub fn add_before_render_new_page(&mut self, listener: PageListener) {
        self.before_render_new_page.push(listener);
    }

    pub fn add_before_render_another_page(&mut self, listener: PageOnceListener) {
        self.before_render_another_page.push(listener);
    }

    /// Snapshot of the navigation-start listeners, in registration order.
    pub fn navigation_start_listeners(&self) -> Vec<NavigationListener> {
        self.navigation_start.clone()
    }

    /// Snapshot of the navigation-end listeners, in registration order.
    pub fn navigation_end_listeners(&self) -> Vec<NavigationListener> {
        self.navigation_end.clone()
    }

    /// Snapshot of the before-render-new-page listeners.
    pub fn before_render_new_page_listeners(&self) -> Vec<PageListener> {
        self.before_render_new_page.clone()
    }

    /// Returns and clears the consume-once before-render-another-page
    /// listeners.
    pub fn take_before_render_another_page(&mut self) -> Vec<PageOnceListener> {
        std::mem::take(&mut self.before_render_another_page)
    }

    /// Drop every listener registered for `kind`.
    pub fn remove_all(&mut self, kind: ListenerKind) {
        match kind {
            ListenerKind::NavigationStart => self.navigation_start.clear(),
            ListenerKind::NavigationEnd => self.navigation_end.clear(),
            ListenerKind::BeforeRenderNewPage => self.before_render_new_page.clear(),
            ListenerKind::BeforeRenderAnotherPage => self.before_render_another_page.clear(),
        }
    }

    pub fn count(&self, kind: ListenerKind) -> usize {
        match kind {
            ListenerKind::NavigationStart => self.navigation_start.len(),
            ListenerKind::NavigationEnd => self.navigation_end.len(),
            ListenerKind::BeforeRenderNewPage => self.before_render_new_page.len(),
            ListenerKind::BeforeRenderAnotherPage => self.before_render_another_page.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_kinds() {
        assert_eq!(
            ListenerKind::NavigationStart.subscription(),
            SubscriptionKind::Persistent
        );
        assert_eq!(
            ListenerKind::BeforeRenderAnotherPage.subscription(),
            SubscriptionKind::ConsumeOnce
        );
    }

    #[test]
    fn test_take_clears_consume_once_listeners() {
        let mut registry = ListenerRegistry::new();
        registry.add_before_render_another_page(Arc::new(|_page| {}));
        registry.add_before_render_another_page(Arc::new(|_page| {}));

        let taken = registry.take_before_render_another_page();
        assert_eq!(taken.len(), 2);
        assert_eq!(registry.count(ListenerKind::BeforeRenderAnotherPage), 0);

        // A second take yields nothing.
        assert!(registry.take_before_render_another_page().is_empty());
    }

    #[test]
    fn test_remove_all() {
        let mut registry = ListenerRegistry::new();
        registry.add_navigation_start(Arc::new(|| {}));
        registry.add_navigation_start(Arc::new(|| {}));
        registry.add_navigation_end(Arc::new(|| {}));

        registry.remove_all(ListenerKind::NavigationStart);
        assert_eq!(registry.count(ListenerKind::NavigationStart), 0);
        assert_eq!(registry.count(ListenerKind::NavigationEnd), 1);
    }
}
