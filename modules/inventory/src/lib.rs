// Inventory module - items, recipes, and the branch stock ledger
//
// Clean Architecture layers:
// - domain: entities, value objects, repository traits, the recipe cost engine
// - infrastructure: PostgreSQL repository implementations
//
// Authoring CRUD (create/update items, categories, recipes) is out of scope;
// this crate exposes the core algorithmic surface other crates build on.

pub mod domain;
pub mod infrastructure;

mod error;

// Error type
pub use error::{ErrorKind, InventoryError, ShortItem};

// Domain layer - entities
pub use domain::entities::{
    BranchInventory, InventoryItem, InventoryTransaction, Recipe, RecipeIngredient, RecipeVariant,
    TransactionReference,
};

// Domain layer - value objects
pub use domain::value_objects::{
    Currency, ItemId, ItemType, ProductId, RecipeId, RecipeVariantId, ReservationId, Sku, SourceType, TransactionId,
    TransactionType, UnitOfMeasure, VariantId, VariantType,
};

// Domain layer - repository traits
pub use domain::repositories::{
    BranchInventoryLedger, BranchInventoryRepository, ItemRepository, LedgerRequirement, RecipeRepository,
    RecipeVariantRepository,
};

// Domain layer - services
pub use domain::services::{FlattenedRecipe, LeafRequirement, RecipeCostEngine, RecipeGraph};

// Infrastructure layer - PostgreSQL repositories
pub use infrastructure::persistence::{
    PgBranchInventoryLedger, PgBranchInventoryRepository, PgItemRepository, PgRecipeRepository,
    PgRecipeVariantRepository,
};
