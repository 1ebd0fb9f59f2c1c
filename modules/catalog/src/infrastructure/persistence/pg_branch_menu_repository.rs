// PostgreSQL BranchMenuRepository implementation (spec 4.6 step 6).

use async_trait::async_trait;
use identity::BranchId;
use sqlx::PgPool;
use tenancy::TenantId;
use uuid::Uuid;

use crate::domain::entities::BranchMenu;
use crate::domain::repositories::BranchMenuRepository;
use crate::domain::value_objects::{MenuCategoryId, MenuItemId};
use crate::CatalogError;

pub struct PgBranchMenuRepository {
    pool: PgPool,
}

impl PgBranchMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BranchMenuRow {
    branch_id: Uuid,
    menu_item_id: Uuid,
    selling_price: Option<rust_decimal::Decimal>,
    available: bool,
    visible_on_pos: bool,
    display_order: i32,
    code_snapshot: String,
    name_snapshot: String,
    category_id_snapshot: Option<Uuid>,
}

fn row_to_entity(row: BranchMenuRow) -> BranchMenu {
    BranchMenu::new(
        BranchId::from_uuid(row.branch_id),
        MenuItemId::from_uuid(row.menu_item_id),
        row.selling_price,
        row.available,
        row.visible_on_pos,
        row.display_order,
        row.code_snapshot,
        row.name_snapshot,
        row.category_id_snapshot.map(MenuCategoryId::from_uuid),
    )
}

const SELECT: &str = "SELECT branch_id, menu_item_id, selling_price, available, visible_on_pos, display_order, \
                       code_snapshot, name_snapshot, category_id_snapshot FROM branch_menus";

#[async_trait]
impl BranchMenuRepository for PgBranchMenuRepository {
    async fn save(&self, tenant_id: TenantId, branch_menu: &BranchMenu) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO branch_menus
                (tenant_id, branch_id, menu_item_id, selling_price, available, visible_on_pos, display_order,
                 code_snapshot, name_snapshot, category_id_snapshot)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (branch_id, menu_item_id) DO UPDATE SET
                selling_price = EXCLUDED.selling_price,
                available = EXCLUDED.available,
                visible_on_pos = EXCLUDED.visible_on_pos,
                display_order = EXCLUDED.display_order,
                code_snapshot = EXCLUDED.code_snapshot,
                name_snapshot = EXCLUDED.name_snapshot,
                category_id_snapshot = EXCLUDED.category_id_snapshot
            "#,
        )
        .bind(tenant_id.into_uuid())
        .bind(branch_menu.branch_id().into_uuid())
        .bind(branch_menu.menu_item_id().into_uuid())
        .bind(branch_menu.selling_price())
        .bind(branch_menu.available())
        .bind(branch_menu.visible_on_pos())
        .bind(branch_menu.display_order())
        .bind(branch_menu.code_snapshot())
        .bind(branch_menu.name_snapshot())
        .bind(branch_menu.category_id_snapshot().map(|c| c.into_uuid()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        tenant_id: TenantId,
        branch_id: BranchId,
        menu_item_id: MenuItemId,
    ) -> Result<Option<BranchMenu>, CatalogError> {
        let row = sqlx::query_as::<_, BranchMenuRow>(&format!(
            "{SELECT} WHERE tenant_id = $1 AND branch_id = $2 AND menu_item_id = $3"
        ))
        .bind(tenant_id.into_uuid())
        .bind(branch_id.into_uuid())
        .bind(menu_item_id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_entity))
    }
}
