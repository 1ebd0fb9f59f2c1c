// PostgreSQL MenuItemRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tenancy::TenantId;
use uuid::Uuid;

use crate::domain::entities::MenuItem;
use crate::domain::repositories::MenuItemRepository;
use crate::domain::value_objects::{MenuCategoryId, MenuItemId};
use crate::CatalogError;
use inventory::RecipeId;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: Uuid,
    tenant_id: Uuid,
    name: String,
    slug: String,
    recipe_id: Option<Uuid>,
    base_price: rust_decimal::Decimal,
    price_includes_tax: bool,
    currency: String,
    category_id: Option<Uuid>,
    active: bool,
}

fn row_to_entity(row: MenuItemRow) -> MenuItem {
    MenuItem::reconstitute(
        MenuItemId::from_uuid(row.id),
        TenantId::from_uuid(row.tenant_id),
        row.name,
        row.slug,
        row.recipe_id.map(RecipeId::from_uuid),
        row.base_price,
        row.price_includes_tax,
        row.currency,
        row.category_id.map(MenuCategoryId::from_uuid),
        row.active,
    )
}

const SELECT: &str = "SELECT id, tenant_id, name, slug, recipe_id, base_price, price_includes_tax, currency, \
                       category_id, active FROM menu_items";

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn save(&self, item: &MenuItem) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO menu_items
                (id, tenant_id, name, slug, recipe_id, base_price, price_includes_tax, currency, category_id, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                slug = EXCLUDED.slug,
                recipe_id = EXCLUDED.recipe_id,
                base_price = EXCLUDED.base_price,
                price_includes_tax = EXCLUDED.price_includes_tax,
                currency = EXCLUDED.currency,
                category_id = EXCLUDED.category_id,
                active = EXCLUDED.active
            "#,
        )
        .bind(item.id().into_uuid())
        .bind(item.tenant_id().into_uuid())
        .bind(item.name())
        .bind(item.slug())
        .bind(item.recipe_id().map(|r| r.into_uuid()))
        .bind(item.base_price())
        .bind(item.price_includes_tax())
        .bind(item.currency())
        .bind(item.category_id().map(|c| c.into_uuid()))
        .bind(item.active())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, tenant_id: TenantId, id: MenuItemId) -> Result<Option<MenuItem>, CatalogError> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!("{SELECT} WHERE tenant_id = $1 AND id = $2"))
            .bind(tenant_id.into_uuid())
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(row_to_entity))
    }

    async fn find_by_slug(&self, tenant_id: TenantId, slug: &str) -> Result<Option<MenuItem>, CatalogError> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!("{SELECT} WHERE tenant_id = $1 AND slug = $2"))
            .bind(tenant_id.into_uuid())
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(row_to_entity))
    }
}
