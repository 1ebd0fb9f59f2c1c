// ItemRepository trait - persistence port for InventoryItem

use async_trait::async_trait;

use crate::domain::entities::InventoryItem;
use crate::domain::value_objects::ItemId;
use crate::InventoryError;
use tenancy::TenantId;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn save(&self, item: &InventoryItem) -> Result<(), InventoryError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: ItemId) -> Result<Option<InventoryItem>, InventoryError>;

    async fn find_by_sku(&self, tenant_id: TenantId, sku: &str) -> Result<Option<InventoryItem>, InventoryError>;

    /// Bulk lookup used to resolve item types for ledger mutation (spec 4.3:
    /// "service"-typed items are silently skipped).
    async fn find_by_ids(&self, tenant_id: TenantId, ids: &[ItemId]) -> Result<Vec<InventoryItem>, InventoryError>;
}
