// Domain value objects for inventory management

// ID value objects
mod item_id;
mod recipe_id;
mod recipe_variant_id;
mod reservation_id;
mod transaction_id;
mod variant_id;

// Validated value objects
mod currency;
mod sku;

// Enum value objects
mod item_type;
mod source_type;
mod transaction_type;
mod unit_of_measure;
mod variant_type;

// Re-exports - ID value objects
pub use item_id::ItemId;
pub use recipe_id::RecipeId;
pub use recipe_variant_id::RecipeVariantId;
pub use reservation_id::ReservationId;
pub use transaction_id::TransactionId;
pub use variant_id::VariantId;

/// Identifies a sellable product on the adjacent cart/sale-line surface.
/// Same identity shape as an inventory item; kept as a distinct name where
/// that surface means "the thing a customer is buying" rather than "the
/// thing a branch stocks".
pub type ProductId = ItemId;

// Re-exports - Validated value objects
pub use currency::Currency;
pub use sku::Sku;

// Re-exports - Enum value objects
pub use item_type::ItemType;
pub use source_type::SourceType;
pub use transaction_type::TransactionType;
pub use unit_of_measure::UnitOfMeasure;
pub use variant_type::VariantType;
