// ItemType value object - what an InventoryItem represents for ledger purposes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::InventoryError;

/// Whether an InventoryItem is tracked on the branch ledger at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Tracked on-hand quantity, subject to the branch inventory ledger.
    Stock,
    /// Provisioned to a branch but not quantity-tracked.
    Nonstock,
    /// Never touches the ledger (reserve/deduct/release silently skip it).
    Service,
}

impl ItemType {
    pub fn is_stock(&self) -> bool {
        matches!(self, ItemType::Stock)
    }

    pub fn is_service(&self) -> bool {
        matches!(self, ItemType::Service)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemType::Stock => "stock",
            ItemType::Nonstock => "nonstock",
            ItemType::Service => "service",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ItemType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(ItemType::Stock),
            "nonstock" => Ok(ItemType::Nonstock),
            "service" => Ok(ItemType::Service),
            _ => Err(InventoryError::InvalidItemType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_is_not_stock() {
        assert!(!ItemType::Service.is_stock());
        assert!(ItemType::Service.is_service());
    }

    #[test]
    fn round_trips_through_str() {
        for t in [ItemType::Stock, ItemType::Nonstock, ItemType::Service] {
            assert_eq!(t.to_string().parse::<ItemType>().unwrap(), t);
        }
    }
}
