// Catalog module errors

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Integrity,
    Authorization,
    Internal,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu item not found: {0}")]
    MenuItemNotFound(Uuid),

    #[error("menu item is not available: {0}")]
    MenuItemUnavailable(Uuid),

    #[error("slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("menu category not found: {0}")]
    MenuCategoryNotFound(Uuid),

    #[error("menu variation not found: {0}")]
    MenuVariationNotFound(Uuid),

    #[error("selected variation {variation_id} belongs to a different menu item")]
    VariationBelongsToOtherMenuItem { variation_id: Uuid },

    #[error("variation {variation_id}'s recipe variant does not match its menu item's recipe")]
    VariantRecipeMismatch { variation_id: Uuid },

    #[error("only one size variation may be selected per line")]
    DuplicateSizeVariation,

    #[error("resulting unit price would be negative: {0}")]
    NegativePrice(Decimal),

    #[error("branch menu override not found for branch {branch_id} / item {item_id}")]
    BranchMenuNotFound { branch_id: Uuid, item_id: Uuid },

    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    #[error("invalid order status read back from storage: {0}")]
    InvalidOrderStatus(String),

    #[error("order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("branch not found: {0}")]
    BranchNotFound(Uuid),

    #[error("terminal not found: {0}")]
    TerminalNotFound(Uuid),

    #[error("terminal {0} is not active")]
    TerminalInactive(Uuid),

    #[error("terminal {terminal_id} does not belong to branch {branch_id}")]
    TerminalBranchMismatch { terminal_id: Uuid, branch_id: Uuid },

    #[error("no branch could be resolved for this request")]
    BranchRequired,

    #[error("no terminal could be resolved for this request")]
    TerminalRequired,

    #[error("actor is not authorized to perform this action")]
    NotAuthorized,

    #[error("account {0} is suspended")]
    AccountSuspended(Uuid),

    #[error("actor {0} is not a staff member")]
    NotStaff(Uuid),

    #[error("no open till session for this branch/terminal")]
    NoOpenTill,

    #[error("till session is closed")]
    TillClosed,

    #[error("order number allocation failed after exhausting retries")]
    OrderNumberAllocationFailed,

    #[error("a commit already completed for clientOpId {0}")]
    DuplicateClientOpId(String),

    #[error("order status does not permit this transition")]
    InvalidOrderStatusTransition,

    #[error("actor error: {0}")]
    Identity(#[from] identity::IdentityError),

    #[error("core error: {0}")]
    Core(#[from] pos_core::CoreError),

    #[error("till error: {0}")]
    Till(#[from] till::TillError),

    #[error("inventory error: {0}")]
    Inventory(#[from] inventory::InventoryError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MenuItemNotFound(_)
            | CatalogError::MenuCategoryNotFound(_)
            | CatalogError::MenuVariationNotFound(_)
            | CatalogError::BranchMenuNotFound { .. }
            | CatalogError::OrderNotFound(_)
            | CatalogError::BranchNotFound(_)
            | CatalogError::TerminalNotFound(_) => ErrorKind::NotFound,

            CatalogError::MenuItemUnavailable(_)
            | CatalogError::TerminalInactive(_)
            | CatalogError::TerminalBranchMismatch { .. }
            | CatalogError::NoOpenTill
            | CatalogError::TillClosed
            | CatalogError::DuplicateClientOpId(_)
            | CatalogError::InvalidOrderStatusTransition => ErrorKind::Conflict,

            CatalogError::DuplicateSlug(_) => ErrorKind::Conflict,

            CatalogError::VariationBelongsToOtherMenuItem { .. } | CatalogError::VariantRecipeMismatch { .. } => {
                ErrorKind::Integrity
            }

            CatalogError::DuplicateSizeVariation
            | CatalogError::NegativePrice(_)
            | CatalogError::InvalidPaymentMethod(_)
            | CatalogError::InvalidOrderStatus(_) => ErrorKind::Validation,

            CatalogError::BranchRequired
            | CatalogError::TerminalRequired
            | CatalogError::NotAuthorized
            | CatalogError::AccountSuspended(_)
            | CatalogError::NotStaff(_) => ErrorKind::Authorization,

            CatalogError::OrderNumberAllocationFailed => ErrorKind::Internal,

            CatalogError::Identity(inner) => match inner.kind() {
                identity::ErrorKind::Validation => ErrorKind::Validation,
                identity::ErrorKind::NotFound => ErrorKind::NotFound,
                identity::ErrorKind::Conflict => ErrorKind::Conflict,
                identity::ErrorKind::Authorization => ErrorKind::Authorization,
                identity::ErrorKind::RateLimited => ErrorKind::Conflict,
                identity::ErrorKind::Internal => ErrorKind::Internal,
            },

            CatalogError::Core(inner) => match inner.kind() {
                pos_core::ErrorKind::Validation => ErrorKind::Validation,
                pos_core::ErrorKind::NotFound => ErrorKind::NotFound,
                pos_core::ErrorKind::Conflict => ErrorKind::Conflict,
                pos_core::ErrorKind::Internal => ErrorKind::Internal,
            },

            CatalogError::Till(inner) => match inner.kind() {
                till::ErrorKind::Validation => ErrorKind::Validation,
                till::ErrorKind::NotFound => ErrorKind::NotFound,
                till::ErrorKind::Conflict => ErrorKind::Conflict,
                till::ErrorKind::Internal => ErrorKind::Internal,
            },

            CatalogError::Inventory(inner) => match inner.kind() {
                inventory::ErrorKind::Validation => ErrorKind::Validation,
                inventory::ErrorKind::NotFound => ErrorKind::NotFound,
                inventory::ErrorKind::Conflict => ErrorKind::Conflict,
                inventory::ErrorKind::Integrity => ErrorKind::Integrity,
                inventory::ErrorKind::Internal => ErrorKind::Internal,
            },

            CatalogError::Database(_) => ErrorKind::Internal,
        }
    }
}
