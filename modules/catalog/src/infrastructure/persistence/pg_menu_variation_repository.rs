// PostgreSQL MenuVariationRepository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use tenancy::TenantId;
use uuid::Uuid;

use crate::domain::entities::MenuVariation;
use crate::domain::repositories::MenuVariationRepository;
use crate::domain::value_objects::{MenuItemId, MenuVariationId};
use crate::CatalogError;
use inventory::{RecipeVariantId, VariantType};

pub struct PgMenuVariationRepository {
    pool: PgPool,
}

impl PgMenuVariationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MenuVariationRow {
    id: Uuid,
    menu_item_id: Uuid,
    name: String,
    variant_type: String,
    recipe_variant_id: Option<Uuid>,
    price_delta: rust_decimal::Decimal,
    size_multiplier: rust_decimal::Decimal,
    calculated_cost: rust_decimal::Decimal,
}

fn row_to_entity(row: MenuVariationRow) -> Result<MenuVariation, CatalogError> {
    Ok(MenuVariation::reconstitute(
        MenuVariationId::from_uuid(row.id),
        MenuItemId::from_uuid(row.menu_item_id),
        row.name,
        row.variant_type.parse::<VariantType>()?,
        row.recipe_variant_id.map(RecipeVariantId::from_uuid),
        row.price_delta,
        row.size_multiplier,
        row.calculated_cost,
    ))
}

const SELECT: &str = "SELECT id, menu_item_id, name, variant_type, recipe_variant_id, price_delta, \
                       size_multiplier, calculated_cost FROM menu_variations";

#[async_trait]
impl MenuVariationRepository for PgMenuVariationRepository {
    async fn save(&self, tenant_id: TenantId, variation: &MenuVariation) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO menu_variations
                (id, tenant_id, menu_item_id, name, variant_type, recipe_variant_id, price_delta, size_multiplier, calculated_cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                variant_type = EXCLUDED.variant_type,
                recipe_variant_id = EXCLUDED.recipe_variant_id,
                price_delta = EXCLUDED.price_delta,
                size_multiplier = EXCLUDED.size_multiplier,
                calculated_cost = EXCLUDED.calculated_cost
            "#,
        )
        .bind(variation.id().into_uuid())
        .bind(tenant_id.into_uuid())
        .bind(variation.menu_item_id().into_uuid())
        .bind(variation.name())
        .bind(variation.variant_type().to_string())
        .bind(variation.recipe_variant_id().map(|v| v.into_uuid()))
        .bind(variation.price_delta())
        .bind(variation.size_multiplier())
        .bind(variation.calculated_cost())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_menu_item(
        &self,
        tenant_id: TenantId,
        menu_item_id: MenuItemId,
    ) -> Result<Vec<MenuVariation>, CatalogError> {
        let rows = sqlx::query_as::<_, MenuVariationRow>(&format!("{SELECT} WHERE tenant_id = $1 AND menu_item_id = $2"))
            .bind(tenant_id.into_uuid())
            .bind(menu_item_id.into_uuid())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_entity).collect()
    }

    async fn find_by_ids(
        &self,
        tenant_id: TenantId,
        ids: &[MenuVariationId],
    ) -> Result<Vec<MenuVariation>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_uuid()).collect();
        let rows = sqlx::query_as::<_, MenuVariationRow>(&format!("{SELECT} WHERE tenant_id = $1 AND id = ANY($2)"))
            .bind(tenant_id.into_uuid())
            .bind(&ids)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_entity).collect()
    }
}
