// BranchCode value object
// Validates: alphanumeric with hyphens, 2-20 characters, auto-uppercase

use crate::CoreError;
use serde::{Deserialize, Serialize};

/// Branch code - unique identifier within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCode(String);

impl BranchCode {
    pub fn new(code: &str) -> Result<Self, CoreError> {
        if code.len() < 2 || code.len() > 20 {
            return Err(CoreError::InvalidBranchCode);
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CoreError::InvalidBranchCode);
        }

        Ok(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_code() {
        assert_eq!(BranchCode::new("main-01").unwrap().as_str(), "MAIN-01");
    }

    #[test]
    fn rejects_too_short() {
        assert!(BranchCode::new("a").is_err());
    }

    #[test]
    fn rejects_invalid_chars() {
        assert!(BranchCode::new("ma!n").is_err());
    }
}
