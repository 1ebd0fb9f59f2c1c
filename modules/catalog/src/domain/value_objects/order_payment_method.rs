// OrderPaymentMethod - the closed set of payment methods the order-commit
// path accepts (spec 4.6 input, 3). Looked up by name against
// `Branch.posConfig.paymentMethods` for a tax-rate override.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPaymentMethod {
    Cash,
    Card,
    Mobile,
    Split,
}

impl OrderPaymentMethod {
    pub fn is_cash(&self) -> bool {
        matches!(self, OrderPaymentMethod::Cash)
    }

    pub fn is_card(&self) -> bool {
        matches!(self, OrderPaymentMethod::Card)
    }
}

impl FromStr for OrderPaymentMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(OrderPaymentMethod::Cash),
            "card" => Ok(OrderPaymentMethod::Card),
            "mobile" => Ok(OrderPaymentMethod::Mobile),
            "split" => Ok(OrderPaymentMethod::Split),
            _ => Err(CatalogError::InvalidPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for OrderPaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderPaymentMethod::Cash => "cash",
            OrderPaymentMethod::Card => "card",
            OrderPaymentMethod::Mobile => "mobile",
            OrderPaymentMethod::Split => "split",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_spec_methods() {
        assert_eq!(OrderPaymentMethod::from_str("cash").unwrap(), OrderPaymentMethod::Cash);
        assert_eq!(OrderPaymentMethod::from_str("card").unwrap(), OrderPaymentMethod::Card);
        assert_eq!(OrderPaymentMethod::from_str("mobile").unwrap(), OrderPaymentMethod::Mobile);
        assert_eq!(OrderPaymentMethod::from_str("split").unwrap(), OrderPaymentMethod::Split);
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(OrderPaymentMethod::from_str("bitcoin").is_err());
    }
}
