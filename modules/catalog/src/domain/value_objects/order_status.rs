// OrderStatus - the order's lifecycle (spec 3). An order is immutable
// after creation; only these explicit transitions may change its status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Paid,
    Void,
    Refunded,
}

impl OrderStatus {
    /// `paid` iff `amountPaid >= grandTotal` at commit time (spec 4.6b),
    /// otherwise `placed`.
    pub fn from_payment(amount_paid: rust_decimal::Decimal, grand_total: rust_decimal::Decimal) -> Self {
        if amount_paid >= grand_total {
            OrderStatus::Paid
        } else {
            OrderStatus::Placed
        }
    }

    pub fn can_void(&self) -> bool {
        matches!(self, OrderStatus::Placed | OrderStatus::Paid)
    }

    pub fn can_refund(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }

    pub fn validate_void(&self) -> Result<(), CatalogError> {
        if self.can_void() {
            Ok(())
        } else {
            Err(CatalogError::InvalidOrderStatusTransition)
        }
    }

    pub fn validate_refund(&self) -> Result<(), CatalogError> {
        if self.can_refund() {
            Ok(())
        } else {
            Err(CatalogError::InvalidOrderStatusTransition)
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Paid => "paid",
            OrderStatus::Void => "void",
            OrderStatus::Refunded => "refunded",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OrderStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(OrderStatus::Placed),
            "paid" => Ok(OrderStatus::Paid),
            "void" => Ok(OrderStatus::Void),
            "refunded" => Ok(OrderStatus::Refunded),
            other => Err(CatalogError::InvalidOrderStatus(other.to_string())),
        }
    }
}
