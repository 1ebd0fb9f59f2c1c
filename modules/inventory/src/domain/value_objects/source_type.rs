// SourceType value object - what a RecipeIngredient's sourceId points at

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::InventoryError;

/// Whether a RecipeIngredient's `sourceId` resolves against InventoryItem or Recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Inventory,
    Recipe,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceType::Inventory => "inventory",
            SourceType::Recipe => "recipe",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SourceType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(SourceType::Inventory),
            "recipe" => Ok(SourceType::Recipe),
            _ => Err(InventoryError::InvalidSourceType),
        }
    }
}
