// MenuItemRepository trait - persistence port for MenuItem

use async_trait::async_trait;
use tenancy::TenantId;

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::MenuItemId;
use crate::CatalogError;

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn save(&self, item: &MenuItem) -> Result<(), CatalogError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: MenuItemId) -> Result<Option<MenuItem>, CatalogError>;

    async fn find_by_slug(&self, tenant_id: TenantId, slug: &str) -> Result<Option<MenuItem>, CatalogError>;
}
