// TransactionType value object - the kind of movement an InventoryTransaction records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::InventoryError;

/// Ledger entry kind. `Receipt`/`TransferIn`/`Release` (modelled as `Adjust`) increase
/// `onHandQty`; `Usage`/`Waste`/`TransferOut`/`Prep` decrease it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Receipt,
    Usage,
    Waste,
    Adjust,
    TransferOut,
    TransferIn,
    Prep,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionType::Receipt => "receipt",
            TransactionType::Usage => "usage",
            TransactionType::Waste => "waste",
            TransactionType::Adjust => "adjust",
            TransactionType::TransferOut => "transferOut",
            TransactionType::TransferIn => "transferIn",
            TransactionType::Prep => "prep",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TransactionType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(TransactionType::Receipt),
            "usage" => Ok(TransactionType::Usage),
            "waste" => Ok(TransactionType::Waste),
            "adjust" => Ok(TransactionType::Adjust),
            "transferOut" => Ok(TransactionType::TransferOut),
            "transferIn" => Ok(TransactionType::TransferIn),
            "prep" => Ok(TransactionType::Prep),
            _ => Err(InventoryError::InvalidTransactionType),
        }
    }
}
