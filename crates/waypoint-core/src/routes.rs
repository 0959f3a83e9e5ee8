//! Route table
//!
//! The matched-route side of the navigation layer: a tree of routes the
//! host router matches against, addressed by the route indices it reports.
//! The table itself does no URL matching; it only resolves index chains
//! back into routes for hooks, metadata, and stats.

use std::sync::Arc;

use serde_json::Value;

use crate::error::NavigationError;
use crate::hooks::{OnLoadedHook, PageLoadedArgs};
use crate::Result;

/// One node of the route tree. A route may omit `path` when it exists
/// purely to nest children under a shared component.
#[derive(Clone, Default)]
pub struct Route {
    pub path: Option<String>,
    /// Metadata handed to the metadata collaborator; merging is its concern.
    pub meta: Option<Value>,
    /// Invoked when this route resolves as the leaf of a navigation
    /// (not called under code-split loading).
    pub on_loaded: Option<OnLoadedHook>,
    pub children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// A nesting-only route without a path of its own.
    pub fn pathless() -> Self {
        Self::default()
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    pub fn on_loaded(mut self, hook: impl Fn(PageLoadedArgs<'_>) + Send + Sync + 'static) -> Self {
        self.on_loaded = Some(Arc::new(hook));
        self
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("meta", &self.meta)
            .field("has_on_loaded", &self.on_loaded.is_some())
            .field("children", &self.children)
            .finish()
    }
}

/// The route table: top-level routes plus chain resolution by indices.
#[derive(Debug, Clone, Default)]
pub struct Routes {
    roots: Vec<Route>,
}

impl Routes {
    pub fn new(roots: Vec<Route>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Route] {
        &self.roots
    }

    /// Top-level route paths must carry a leading slash; a missing one is
    /// the configuration defect behind most routing mismatches.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(NavigationError::InvalidRoutes(
                "the route table is empty".to_string(),
            ));
        }
        for root in &self.roots {
            if let Some(path) = &root.path {
                if !path.starts_with('/') {
                    return Err(NavigationError::InvalidRoutes(format!(
                        "top-level route path \"{}\" is missing a leading \"/\"",
                        path
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve a chain of route indices (root to leaf) into routes.
    pub fn by_indices(&self, indices: &[usize]) -> Result<Vec<&Route>> {
        let mut chain = Vec::with_capacity(indices.len());
        let mut level = &self.roots;

        for (depth, &index) in indices.iter().enumerate() {
            let route = level
                .get(index)
                .ok_or(NavigationError::UnknownRoute { index, depth })?;
            chain.push(route);
            level = &route.children;
        }

        Ok(chain)
    }

    /// Concatenated path of a route chain, e.g. `/users/:user_id/posts`.
    /// Pathless and `/` segments contribute nothing; an all-empty chain
    /// renders as `/`.
    pub fn route_path(chain: &[&Route]) -> String {
        let mut path = String::new();
        for route in chain {
            if let Some(segment) = &route.path {
                if segment.is_empty() || segment == "/" {
                    continue;
                }
                if !segment.starts_with('/') {
                    path.push('/');
                }
                path.push_str(segment);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }
}
