// PostgreSQL RecipeVariantRepository implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tenancy::TenantId;

use crate::domain::entities::{RecipeIngredient, RecipeVariant};
use crate::domain::repositories::RecipeVariantRepository;
use crate::domain::value_objects::{RecipeId, RecipeVariantId, SourceType, VariantType};
use crate::InventoryError;

pub struct PgRecipeVariantRepository {
    pool: PgPool,
}

impl PgRecipeVariantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VariantRow {
    id: uuid::Uuid,
    tenant_id: uuid::Uuid,
    recipe_id: uuid::Uuid,
    variant_type: String,
    size_multiplier: Decimal,
    base_cost_adjustment: Decimal,
}

#[derive(sqlx::FromRow)]
struct VariantIngredientRow {
    variant_id: uuid::Uuid,
    source_type: String,
    source_id: uuid::Uuid,
    quantity: Decimal,
    unit: String,
    name_snapshot: String,
    cost_per_unit: Decimal,
}

impl TryFrom<VariantIngredientRow> for RecipeIngredient {
    type Error = InventoryError;

    fn try_from(row: VariantIngredientRow) -> Result<Self, Self::Error> {
        Ok(RecipeIngredient {
            source_type: row.source_type.parse::<SourceType>()?,
            source_id: row.source_id,
            quantity: row.quantity,
            unit: row.unit,
            name_snapshot: row.name_snapshot,
            cost_per_unit: row.cost_per_unit,
        })
    }
}

#[async_trait]
impl RecipeVariantRepository for PgRecipeVariantRepository {
    async fn save(&self, variant: &RecipeVariant) -> Result<(), InventoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO recipe_variants (id, tenant_id, recipe_id, variant_type, size_multiplier, base_cost_adjustment)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                variant_type = EXCLUDED.variant_type,
                size_multiplier = EXCLUDED.size_multiplier,
                base_cost_adjustment = EXCLUDED.base_cost_adjustment
            "#,
        )
        .bind(variant.id().into_uuid())
        .bind(variant.tenant_id().into_uuid())
        .bind(variant.recipe_id().into_uuid())
        .bind(variant.variant_type().to_string())
        .bind(variant.size_multiplier())
        .bind(variant.base_cost_adjustment())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM recipe_variant_ingredients WHERE variant_id = $1")
            .bind(variant.id().into_uuid())
            .execute(&mut *tx)
            .await?;

        for ing in variant.ingredients() {
            sqlx::query(
                r#"
                INSERT INTO recipe_variant_ingredients
                    (variant_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(variant.id().into_uuid())
            .bind(ing.source_type.to_string())
            .bind(ing.source_id)
            .bind(ing.quantity)
            .bind(&ing.unit)
            .bind(&ing.name_snapshot)
            .bind(ing.cost_per_unit)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: RecipeVariantId,
    ) -> Result<Option<RecipeVariant>, InventoryError> {
        let rows = self.find_by_ids(tenant_id, &[id]).await?;
        Ok(rows.into_iter().next())
    }

    async fn find_by_ids(
        &self,
        tenant_id: TenantId,
        ids: &[RecipeVariantId],
    ) -> Result<Vec<RecipeVariant>, InventoryError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_uuid()).collect();

        let variant_rows = sqlx::query_as::<_, VariantRow>(
            "SELECT id, tenant_id, recipe_id, variant_type, size_multiplier, base_cost_adjustment \
             FROM recipe_variants WHERE tenant_id = $1 AND id = ANY($2)",
        )
        .bind(tenant_id.into_uuid())
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        let ingredient_rows = sqlx::query_as::<_, VariantIngredientRow>(
            "SELECT variant_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit \
             FROM recipe_variant_ingredients WHERE variant_id = ANY($1)",
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_variant: std::collections::HashMap<uuid::Uuid, Vec<RecipeIngredient>> =
            std::collections::HashMap::new();
        for row in ingredient_rows {
            let variant_id = row.variant_id;
            by_variant.entry(variant_id).or_default().push(row.try_into()?);
        }

        variant_rows
            .into_iter()
            .map(|row| {
                let ingredients = by_variant.remove(&row.id).unwrap_or_default();
                Ok(RecipeVariant::reconstitute(
                    RecipeVariantId::from_uuid(row.id),
                    TenantId::from_uuid(row.tenant_id),
                    RecipeId::from_uuid(row.recipe_id),
                    row.variant_type.parse::<VariantType>()?,
                    row.size_multiplier,
                    row.base_cost_adjustment,
                    ingredients,
                ))
            })
            .collect()
    }
}
