//! TillSessionStatus enum - status of a till session (spec 4.5: open -> closed only)

use crate::TillError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a till session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TillSessionStatus {
    /// Session is currently open
    Open,
    /// Session has been closed (sealed)
    Closed,
}

impl TillSessionStatus {
    /// Returns all available statuses
    pub fn all() -> &'static [TillSessionStatus] {
        &[TillSessionStatus::Open, TillSessionStatus::Closed]
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TillSessionStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TillSessionStatus::Closed)
    }

    pub fn can_close(&self) -> bool {
        matches!(self, TillSessionStatus::Open)
    }

    /// Validates transition from current status to new status. Spec 4.5:
    /// `open -> closed` only, no reopen.
    pub fn can_transition_to(&self, new_status: TillSessionStatus) -> bool {
        matches!((self, new_status), (TillSessionStatus::Open, TillSessionStatus::Closed))
    }
}

impl FromStr for TillSessionStatus {
    type Err = TillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TillSessionStatus::Open),
            "closed" => Ok(TillSessionStatus::Closed),
            _ => Err(TillError::InvalidStatus),
        }
    }
}

impl fmt::Display for TillSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TillSessionStatus::Open => write!(f, "open"),
            TillSessionStatus::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TillSessionStatus::from_str("open").unwrap(), TillSessionStatus::Open);
        assert_eq!(TillSessionStatus::from_str("closed").unwrap(), TillSessionStatus::Closed);
    }

    #[test]
    fn test_display() {
        assert_eq!(TillSessionStatus::Open.to_string(), "open");
        assert_eq!(TillSessionStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(TillSessionStatus::Open.can_transition_to(TillSessionStatus::Closed));
        assert!(!TillSessionStatus::Closed.can_transition_to(TillSessionStatus::Open));
    }
}
