// PostgreSQL ItemRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tenancy::TenantId;

use crate::domain::entities::InventoryItem;
use crate::domain::repositories::ItemRepository;
use crate::domain::value_objects::{ItemId, ItemType, Sku};
use crate::InventoryError;

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: uuid::Uuid,
    tenant_id: uuid::Uuid,
    name: String,
    sku: String,
    item_type: String,
    base_unit: String,
    category_id: Option<uuid::Uuid>,
    active: bool,
}

impl TryFrom<ItemRow> for InventoryItem {
    type Error = InventoryError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(InventoryItem::reconstitute(
            ItemId::from_uuid(row.id),
            TenantId::from_uuid(row.tenant_id),
            row.name,
            Sku::from_string(row.sku),
            row.item_type.parse::<ItemType>()?,
            row.base_unit,
            row.category_id,
            row.active,
        ))
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn save(&self, item: &InventoryItem) -> Result<(), InventoryError> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items (id, tenant_id, name, sku, item_type, base_unit, category_id, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name, item_type = EXCLUDED.item_type, base_unit = EXCLUDED.base_unit,
                category_id = EXCLUDED.category_id, active = EXCLUDED.active
            "#,
        )
        .bind(item.id().into_uuid())
        .bind(item.tenant_id().into_uuid())
        .bind(item.name())
        .bind(item.sku().as_str())
        .bind(item.item_type().to_string())
        .bind(item.base_unit())
        .bind(item.category_id())
        .bind(item.active())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, tenant_id: TenantId, id: ItemId) -> Result<Option<InventoryItem>, InventoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, tenant_id, name, sku, item_type, base_unit, category_id, active \
             FROM inventory_items WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id.into_uuid())
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_sku(&self, tenant_id: TenantId, sku: &str) -> Result<Option<InventoryItem>, InventoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, tenant_id, name, sku, item_type, base_unit, category_id, active \
             FROM inventory_items WHERE tenant_id = $1 AND sku = $2",
        )
        .bind(tenant_id.into_uuid())
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_ids(&self, tenant_id: TenantId, ids: &[ItemId]) -> Result<Vec<InventoryItem>, InventoryError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_uuid()).collect();
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, tenant_id, name, sku, item_type, base_unit, category_id, active \
             FROM inventory_items WHERE tenant_id = $1 AND id = ANY($2)",
        )
        .bind(tenant_id.into_uuid())
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
