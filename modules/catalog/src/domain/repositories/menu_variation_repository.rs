// MenuVariationRepository trait - persistence port for MenuVariation

use async_trait::async_trait;
use tenancy::TenantId;

use crate::domain::entities::MenuVariation;
use crate::domain::value_objects::{MenuItemId, MenuVariationId};
use crate::CatalogError;

#[async_trait]
pub trait MenuVariationRepository: Send + Sync {
    async fn save(&self, tenant_id: TenantId, variation: &MenuVariation) -> Result<(), CatalogError>;

    /// All variations selectable for a menu item, used by the pricing
    /// engine to resolve a line's selected variation ids in one call.
    async fn find_by_menu_item(
        &self,
        tenant_id: TenantId,
        menu_item_id: MenuItemId,
    ) -> Result<Vec<MenuVariation>, CatalogError>;

    async fn find_by_ids(
        &self,
        tenant_id: TenantId,
        ids: &[MenuVariationId],
    ) -> Result<Vec<MenuVariation>, CatalogError>;
}
