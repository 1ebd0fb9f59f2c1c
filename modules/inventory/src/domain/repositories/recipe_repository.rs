// RecipeRepository trait - persistence port for Recipe

use async_trait::async_trait;

use crate::domain::entities::Recipe;
use crate::domain::value_objects::RecipeId;
use crate::InventoryError;
use tenancy::TenantId;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn save(&self, recipe: &Recipe) -> Result<(), InventoryError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: RecipeId) -> Result<Option<Recipe>, InventoryError>;

    /// Loads every recipe reachable from `roots` (their own sub-recipe
    /// ingredients, transitively) so a caller can build an in-memory
    /// `RecipeGraph` for `RecipeCostEngine::flatten` without per-node I/O.
    async fn load_graph(&self, tenant_id: TenantId, roots: &[RecipeId]) -> Result<Vec<Recipe>, InventoryError>;
}
