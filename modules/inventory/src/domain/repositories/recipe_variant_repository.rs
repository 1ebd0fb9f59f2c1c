// RecipeVariantRepository trait - persistence port for RecipeVariant

use async_trait::async_trait;

use crate::domain::entities::RecipeVariant;
use crate::domain::value_objects::RecipeVariantId;
use crate::InventoryError;
use tenancy::TenantId;

#[async_trait]
pub trait RecipeVariantRepository: Send + Sync {
    async fn save(&self, variant: &RecipeVariant) -> Result<(), InventoryError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: RecipeVariantId,
    ) -> Result<Option<RecipeVariant>, InventoryError>;

    async fn find_by_ids(
        &self,
        tenant_id: TenantId,
        ids: &[RecipeVariantId],
    ) -> Result<Vec<RecipeVariant>, InventoryError>;
}
