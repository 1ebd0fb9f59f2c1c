// PostgreSQL RecipeRepository implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashSet;
use tenancy::TenantId;

use crate::domain::entities::{Recipe, RecipeIngredient};
use crate::domain::repositories::RecipeRepository;
use crate::domain::value_objects::{RecipeId, SourceType};
use crate::InventoryError;

pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: uuid::Uuid,
    tenant_id: uuid::Uuid,
    name: String,
    yield_quantity: Decimal,
}

#[derive(sqlx::FromRow)]
struct IngredientRow {
    recipe_id: uuid::Uuid,
    source_type: String,
    source_id: uuid::Uuid,
    quantity: Decimal,
    unit: String,
    name_snapshot: String,
    cost_per_unit: Decimal,
}

impl TryFrom<IngredientRow> for RecipeIngredient {
    type Error = InventoryError;

    fn try_from(row: IngredientRow) -> Result<Self, Self::Error> {
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

fn assemble(
    recipe_rows: Vec<RecipeRow>,
    mut ingredients_by_recipe: std::collections::HashMap<uuid::Uuid, Vec<RecipeIngredient>>,
) -> Vec<Recipe> {
    recipe_rows
        .into_iter()
        .map(|row| {
            let ingredients = ingredients_by_recipe.remove(&row.id).unwrap_or_default();
            Recipe::reconstitute(
                RecipeId::from_uuid(row.id),
                TenantId::from_uuid(row.tenant_id),
                row.name,
                row.yield_quantity,
                ingredients,
            )
        })
        .collect()
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn save(&self, recipe: &Recipe) -> Result<(), InventoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO recipes (id, tenant_id, name, yield_quantity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, yield_quantity = EXCLUDED.yield_quantity
            "#,
        )
        .bind(recipe.id().into_uuid())
        .bind(recipe.tenant_id().into_uuid())
        .bind(recipe.name())
        .bind(recipe.yield_quantity())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(recipe.id().into_uuid())
            .execute(&mut *tx)
            .await?;

        for ing in recipe.ingredients() {
            sqlx::query(
                r#"
                INSERT INTO recipe_ingredients
                    (recipe_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(recipe.id().into_uuid())
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

    async fn find_by_id(&self, tenant_id: TenantId, id: RecipeId) -> Result<Option<Recipe>, InventoryError> {
        let recipe_row = sqlx::query_as::<_, RecipeRow>(
            "SELECT id, tenant_id, name, yield_quantity FROM recipes WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id.into_uuid())
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(recipe_row) = recipe_row else {
            return Ok(None);
        };

        let ingredient_rows = sqlx::query_as::<_, IngredientRow>(
            "SELECT recipe_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit \
             FROM recipe_ingredients WHERE recipe_id = $1",
        )
        .bind(id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        let mut by_recipe: std::collections::HashMap<uuid::Uuid, Vec<RecipeIngredient>> =
            std::collections::HashMap::new();
        for row in ingredient_rows {
            let recipe_id = row.recipe_id;
            by_recipe.entry(recipe_id).or_default().push(row.try_into()?);
        }

        Ok(assemble(vec![recipe_row], by_recipe).into_iter().next())
    }

    async fn load_graph(&self, tenant_id: TenantId, roots: &[RecipeId]) -> Result<Vec<Recipe>, InventoryError> {
        let mut loaded: HashSet<uuid::Uuid> = HashSet::new();
        let mut frontier: Vec<uuid::Uuid> = roots.iter().map(|r| r.into_uuid()).collect();
        let mut all_recipe_rows: Vec<RecipeRow> = Vec::new();
        let mut all_ingredient_rows: Vec<IngredientRow> = Vec::new();

        while !frontier.is_empty() {
            let pending: Vec<uuid::Uuid> = frontier
                .iter()
                .copied()
                .filter(|id| !loaded.contains(id))
                .collect();
            if pending.is_empty() {
                break;
            }

            let recipe_rows = sqlx::query_as::<_, RecipeRow>(
                "SELECT id, tenant_id, name, yield_quantity FROM recipes WHERE tenant_id = $1 AND id = ANY($2)",
            )
            .bind(tenant_id.into_uuid())
            .bind(&pending)
            .fetch_all(&self.pool)
            .await?;

            let ingredient_rows = sqlx::query_as::<_, IngredientRow>(
                "SELECT recipe_id, source_type, source_id, quantity, unit, name_snapshot, cost_per_unit \
                 FROM recipe_ingredients WHERE recipe_id = ANY($1)",
            )
            .bind(&pending)
            .fetch_all(&self.pool)
            .await?;

            frontier = ingredient_rows
                .iter()
                .filter(|row| row.source_type == "recipe")
                .map(|row| row.source_id)
                .collect();

            pending.into_iter().for_each(|id| {
                loaded.insert(id);
            });
            all_recipe_rows.extend(recipe_rows);
            all_ingredient_rows.extend(ingredient_rows);
        }

        let mut by_recipe: std::collections::HashMap<uuid::Uuid, Vec<RecipeIngredient>> =
            std::collections::HashMap::new();
        for row in all_ingredient_rows {
            let recipe_id = row.recipe_id;
            by_recipe.entry(recipe_id).or_default().push(row.try_into()?);
        }

        Ok(assemble(all_recipe_rows, by_recipe))
    }
}
