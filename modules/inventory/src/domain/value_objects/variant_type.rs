// VariantType value object - the category of a RecipeVariant / MenuVariation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::InventoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantType {
    Size,
    Crust,
    Flavor,
    Addon,
    Combo,
    Custom,
}

impl VariantType {
    pub fn is_size(&self) -> bool {
        matches!(self, VariantType::Size)
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VariantType::Size => "size",
            VariantType::Crust => "crust",
            VariantType::Flavor => "flavor",
            VariantType::Addon => "addon",
            VariantType::Combo => "combo",
            VariantType::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VariantType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "size" => Ok(VariantType::Size),
            "crust" => Ok(VariantType::Crust),
            "flavor" => Ok(VariantType::Flavor),
            "addon" => Ok(VariantType::Addon),
            "combo" => Ok(VariantType::Combo),
            "custom" => Ok(VariantType::Custom),
            _ => Err(InventoryError::InvalidVariantType),
        }
    }
}
