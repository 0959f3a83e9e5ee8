//! History action kinds

use serde::{Deserialize, Serialize};

/// How a location was reached in the history stack.
///
/// `Pop` covers the initial location and any Back/Forward movement;
/// `Push` and `Replace` cover programmatic or link navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavAction {
    Push,
    Replace,
    Pop,
}

impl NavAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Push => "PUSH",
            NavAction::Replace => "REPLACE",
            NavAction::Pop => "POP",
        }
    }
}

impl std::fmt::Display for NavAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PUSH" => Ok(NavAction::Push),
            "REPLACE" => Ok(NavAction::Replace),
            "POP" => Ok(NavAction::Pop),
            _ => Err(format!("Unknown navigation action: {}", s)),
        }
    }
}
