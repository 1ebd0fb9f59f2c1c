// UnitOfMeasure value object - a small closed set of display units for
// product-facing quantities. Recipe ingredients (spec 4.1) carry a
// free-form unit string instead, since authoring can name any base unit;
// this enum only backs the narrower product/sale-item surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InventoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[default]
    Unit,
    Kg,
    Lb,
    Liter,
    Oz,
}

impl FromStr for UnitOfMeasure {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unit" | "units" | "pcs" | "piece" | "pieces" => Ok(UnitOfMeasure::Unit),
            "kg" | "kilogram" | "kilograms" => Ok(UnitOfMeasure::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(UnitOfMeasure::Lb),
            "liter" | "liters" | "l" | "litre" | "litres" => Ok(UnitOfMeasure::Liter),
            "oz" | "ounce" | "ounces" => Ok(UnitOfMeasure::Oz),
            _ => Err(InventoryError::InvalidUnitOfMeasure),
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOfMeasure::Unit => write!(f, "unit"),
            UnitOfMeasure::Kg => write!(f, "kg"),
            UnitOfMeasure::Lb => write!(f, "lb"),
            UnitOfMeasure::Liter => write!(f, "liter"),
            UnitOfMeasure::Oz => write!(f, "oz"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_aliases() {
        assert_eq!(UnitOfMeasure::from_str("kg").unwrap(), UnitOfMeasure::Kg);
        assert_eq!(UnitOfMeasure::from_str("pcs").unwrap(), UnitOfMeasure::Unit);
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(UnitOfMeasure::from_str("stone").is_err());
    }
}
