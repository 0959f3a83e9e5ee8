//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    /// A resolve event arrived with no matched route chain. This is a
    /// configuration defect (route table gap or a path missing its leading
    /// slash), not a recoverable runtime condition.
    #[error("navigation resolved without a matched route chain for path \"{pathname}\"{hint}")]
    RoutingMismatch { pathname: String, hint: String },

    #[error("route index {index} at depth {depth} points outside the route table")]
    UnknownRoute { index: usize, depth: usize },

    #[error("invalid route configuration: {0}")]
    InvalidRoutes(String),
}

impl NavigationError {
    pub(crate) fn routing_mismatch(pathname: &str) -> Self {
        let hint = if pathname.starts_with('/') {
            String::new()
        } else {
            format!(
                " (the path is missing a leading \"/\": correct the route configuration for \"{}\")",
                pathname
            )
        };
        Self::RoutingMismatch {
            pathname: pathname.to_string(),
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_mismatch_message_contains_path() {
        let error = NavigationError::routing_mismatch("/users/42");
        assert!(error.to_string().contains("/users/42"));
        assert!(!error.to_string().contains("leading"));
    }

    #[test]
    fn test_routing_mismatch_hints_at_missing_slash() {
        let error = NavigationError::routing_mismatch("users/42");
        assert!(error.to_string().contains("leading \"/\""));
    }
}
