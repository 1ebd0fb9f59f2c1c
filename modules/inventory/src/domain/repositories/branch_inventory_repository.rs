// BranchInventoryRepository trait - read-side persistence port for BranchInventory rows.
//
// Mutation is exclusively through `BranchInventoryLedger`; this port only
// serves reads (low-stock reports, single-row lookups for authoring).

use async_trait::async_trait;
use identity::BranchId;

use crate::domain::entities::BranchInventory;
use crate::domain::value_objects::ItemId;
use crate::InventoryError;

#[async_trait]
pub trait BranchInventoryRepository: Send + Sync {
    async fn find(&self, branch_id: BranchId, item_id: ItemId) -> Result<Option<BranchInventory>, InventoryError>;

    async fn find_low_stock(&self, branch_id: BranchId) -> Result<Vec<BranchInventory>, InventoryError>;
}
