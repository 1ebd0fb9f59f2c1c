// PostgreSQL BranchInventoryRepository implementation (read side)

use async_trait::async_trait;
use identity::BranchId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::BranchInventory;
use crate::domain::repositories::BranchInventoryRepository;
use crate::domain::value_objects::ItemId;
use crate::InventoryError;

pub struct PgBranchInventoryRepository {
    pool: PgPool,
}

impl PgBranchInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BranchInventoryRow {
    branch_id: uuid::Uuid,
    item_id: uuid::Uuid,
    on_hand_qty: Decimal,
    reorder_point: Decimal,
    min_stock: Decimal,
    max_stock: Option<Decimal>,
    cost_per_unit: Decimal,
    selling_price: Option<Decimal>,
    active: bool,
}

impl From<BranchInventoryRow> for BranchInventory {
    fn from(row: BranchInventoryRow) -> Self {
        BranchInventory::reconstitute(
            BranchId::from_uuid(row.branch_id),
            ItemId::from_uuid(row.item_id),
            row.on_hand_qty,
            row.reorder_point,
            row.min_stock,
            row.max_stock,
            row.cost_per_unit,
            row.selling_price,
            row.active,
        )
    }
}

#[async_trait]
impl BranchInventoryRepository for PgBranchInventoryRepository {
    async fn find(&self, branch_id: BranchId, item_id: ItemId) -> Result<Option<BranchInventory>, InventoryError> {
        let row = sqlx::query_as::<_, BranchInventoryRow>(
            "SELECT branch_id, item_id, on_hand_qty, reorder_point, min_stock, max_stock, cost_per_unit, \
             selling_price, active FROM branch_inventories WHERE branch_id = $1 AND item_id = $2",
        )
        .bind(branch_id.into_uuid())
        .bind(item_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_low_stock(&self, branch_id: BranchId) -> Result<Vec<BranchInventory>, InventoryError> {
        let rows = sqlx::query_as::<_, BranchInventoryRow>(
            "SELECT branch_id, item_id, on_hand_qty, reorder_point, min_stock, max_stock, cost_per_unit, \
             selling_price, active FROM branch_inventories \
             WHERE branch_id = $1 AND active AND on_hand_qty <= reorder_point",
        )
        .bind(branch_id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
