// BranchMenuRepository port - per-(branch, menuItem) price/availability
// overrides (spec 4.6 step 6 reads this alongside MenuItem).

use async_trait::async_trait;
use identity::BranchId;
use tenancy::TenantId;

use crate::domain::entities::BranchMenu;
use crate::domain::value_objects::MenuItemId;
use crate::CatalogError;

#[async_trait]
pub trait BranchMenuRepository: Send + Sync {
    async fn save(&self, tenant_id: TenantId, branch_menu: &BranchMenu) -> Result<(), CatalogError>;

    async fn find(
        &self,
        tenant_id: TenantId,
        branch_id: BranchId,
        menu_item_id: MenuItemId,
    ) -> Result<Option<BranchMenu>, CatalogError>;
}
