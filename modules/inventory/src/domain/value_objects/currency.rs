// Currency value object - ISO 4217 currency code (3 uppercase letters)

use serde::{Deserialize, Serialize};

use crate::InventoryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self, InventoryError> {
        let code = code.to_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(InventoryError::InvalidCurrency);
        }
        Ok(Self(code))
    }

    pub fn from_string(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self("SAR".to_string())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_uppercase_letters() {
        assert_eq!(Currency::new("sar").unwrap().as_str(), "SAR");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Currency::new("US").is_err());
    }
}
