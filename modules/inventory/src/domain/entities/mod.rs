// Domain entities for inventory management

mod branch_inventory;
mod inventory_item;
mod inventory_transaction;
mod recipe;
mod recipe_variant;

pub use branch_inventory::BranchInventory;
pub use inventory_item::InventoryItem;
pub use inventory_transaction::{InventoryTransaction, TransactionReference};
pub use recipe::{Recipe, RecipeIngredient};
pub use recipe_variant::{default_size_multiplier, RecipeVariant};
