// PostgreSQL repository implementations

mod pg_branch_inventory_ledger;
mod pg_branch_inventory_repository;
mod pg_item_repository;
mod pg_recipe_repository;
mod pg_recipe_variant_repository;

// Re-exports
pub use pg_branch_inventory_ledger::PgBranchInventoryLedger;
pub use pg_branch_inventory_repository::PgBranchInventoryRepository;
pub use pg_item_repository::PgItemRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_recipe_variant_repository::PgRecipeVariantRepository;
