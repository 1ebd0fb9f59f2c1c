// Repository traits for inventory management

mod branch_inventory_ledger;
mod branch_inventory_repository;
mod item_repository;
mod recipe_repository;
mod recipe_variant_repository;

// Re-exports
pub use branch_inventory_ledger::{BranchInventoryLedger, LedgerRequirement};
pub use branch_inventory_repository::BranchInventoryRepository;
pub use item_repository::ItemRepository;
pub use recipe_repository::RecipeRepository;
pub use recipe_variant_repository::RecipeVariantRepository;
