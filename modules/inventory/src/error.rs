// Inventory module errors

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy consumed at the (external) translation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Integrity,
    Internal,
}

/// A single short-item entry attached to `InsufficientStock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortItem {
    pub item_id: Uuid,
    pub needed: Decimal,
    pub on_hand: Decimal,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(Uuid),

    #[error("Recipe variant not found: {0}")]
    RecipeVariantNotFound(Uuid),

    #[error("Recipe cycle detected: {path:?}")]
    RecipeCycleDetected { path: Vec<Uuid> },

    #[error("Recipe yield must be positive")]
    InvalidYieldQuantity,

    #[error("Ingredient quantity must be positive")]
    InvalidIngredientQuantity,

    #[error("Size multiplier must be at least 0.01")]
    InvalidSizeMultiplier,

    #[error("A recipe variant is resolvable only against its own parent recipe")]
    VariantRecipeMismatch,

    #[error("Item {item_id} is not stocked at this branch")]
    IngredientNotStockedAtBranch { item_id: Uuid },

    #[error("Insufficient stock: {items:?}")]
    InsufficientStock { items: Vec<ShortItem> },

    #[error("Invalid item type")]
    InvalidItemType,

    #[error("Invalid source type")]
    InvalidSourceType,

    #[error("Invalid transaction type")]
    InvalidTransactionType,

    #[error("Invalid variant type")]
    InvalidVariantType,

    #[error("Invalid currency code: must be 3 uppercase letters (ISO 4217)")]
    InvalidCurrency,

    #[error("Invalid unit of measure")]
    InvalidUnitOfMeasure,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::ItemNotFound(_)
            | InventoryError::RecipeNotFound(_)
            | InventoryError::RecipeVariantNotFound(_) => ErrorKind::NotFound,

            InventoryError::DuplicateSku(_) | InventoryError::InsufficientStock { .. } => ErrorKind::Conflict,

            InventoryError::RecipeCycleDetected { .. } | InventoryError::VariantRecipeMismatch => {
                ErrorKind::Integrity
            }

            InventoryError::InvalidYieldQuantity
            | InventoryError::InvalidIngredientQuantity
            | InventoryError::InvalidSizeMultiplier
            | InventoryError::IngredientNotStockedAtBranch { .. }
            | InventoryError::InvalidItemType
            | InventoryError::InvalidSourceType
            | InventoryError::InvalidTransactionType
            | InventoryError::InvalidVariantType
            | InventoryError::InvalidCurrency
            | InventoryError::InvalidUnitOfMeasure => ErrorKind::Validation,

            InventoryError::Database(_) => ErrorKind::Internal,
        }
    }
}
