//! Controller configuration

use std::time::Duration;

use serde_json::Value;

use crate::hooks::{
    BeforeNavigateArgs, BeforeNavigateHook, NavigateArgs, NavigateHook, NavigationStats, StatsHook,
};

/// Navigation controller configuration.
pub struct NavigationOptions {
    /// Route components and loaders are registered per-route instead of
    /// through the global loader. Disables leaf `on_loaded` dispatch and
    /// the anchor-navigation skip shim.
    pub code_split: bool,
    /// Opaque host data handed to the navigation hooks.
    pub app_context: Option<Value>,
    /// Resolves slower than this get a diagnostic log line.
    pub slow_navigation_threshold: Duration,
    pub on_before_navigate: Option<BeforeNavigateHook>,
    pub on_navigate: Option<NavigateHook>,
    pub report_stats: Option<StatsHook>,
}

impl NavigationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code_split(mut self, code_split: bool) -> Self {
        self.code_split = code_split;
        self
    }

    pub fn with_app_context(mut self, app_context: Value) -> Self {
        self.app_context = Some(app_context);
        self
    }

    pub fn on_before_navigate(
        mut self,
        hook: impl Fn(BeforeNavigateArgs<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on_before_navigate = Some(Box::new(hook));
        self
    }

    pub fn on_navigate(mut self, hook: impl Fn(NavigateArgs<'_>) + Send + Sync + 'static) -> Self {
        self.on_navigate = Some(Box::new(hook));
        self
    }

    pub fn report_stats(
        mut self,
        hook: impl Fn(&NavigationStats) + Send + Sync + 'static,
    ) -> Self {
        self.report_stats = Some(Box::new(hook));
        self
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            code_split: false,
            app_context: None,
            slow_navigation_threshold: Duration::from_millis(30),
            on_before_navigate: None,
            on_navigate: None,
            report_stats: None,
        }
    }
}

impl std::fmt::Debug for NavigationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationOptions")
            .field("code_split", &self.code_split)
            .field("app_context", &self.app_context)
            .field("slow_navigation_threshold", &self.slow_navigation_threshold)
            .field("has_on_before_navigate", &self.on_before_navigate.is_some())
            .field("has_on_navigate", &self.on_navigate.is_some())
            .field("has_report_stats", &self.report_stats.is_some())
            .finish()
    }
}
