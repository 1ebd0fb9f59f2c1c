// Recipe entity - a composition of ingredients that flattens to leaf inventory
// requirements and a total cost (see domain::services::RecipeCostEngine).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::{ItemId, RecipeId, SourceType};

/// One line of a recipe's bill of materials. Embedded, not its own aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub source_type: SourceType,
    /// An ItemId when source_type = Inventory, a RecipeId when source_type = Recipe.
    pub source_id: uuid::Uuid,
    pub quantity: Decimal,
    pub unit: String,
    pub name_snapshot: String,
    pub cost_per_unit: Decimal,
}

impl RecipeIngredient {
    pub fn source_item_id(&self) -> Option<ItemId> {
        matches!(self.source_type, SourceType::Inventory).then(|| ItemId::from_uuid(self.source_id))
    }

    pub fn source_recipe_id(&self) -> Option<RecipeId> {
        matches!(self.source_type, SourceType::Recipe).then(|| RecipeId::from_uuid(self.source_id))
    }
}

/// A composition whose ingredient graph must be acyclic (enforced at authoring
/// time and defensively by RecipeCostEngine's path-stack cycle check).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    id: RecipeId,
    tenant_id: TenantId,
    name: String,
    yield_quantity: Decimal,
    ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn new(tenant_id: TenantId, name: String, yield_quantity: Decimal, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            id: RecipeId::new(),
            tenant_id,
            name,
            yield_quantity,
            ingredients,
        }
    }

    pub fn reconstitute(
        id: RecipeId,
        tenant_id: TenantId,
        name: String,
        yield_quantity: Decimal,
        ingredients: Vec<RecipeIngredient>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            yield_quantity,
            ingredients,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn yield_quantity(&self) -> Decimal {
        self.yield_quantity
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reconstitute_round_trips_fields() {
        let r = Recipe::new(TenantId::new(), "Pizza base".into(), dec!(1), vec![]);
        let r2 = Recipe::reconstitute(r.id(), r.tenant_id(), r.name().to_string(), r.yield_quantity(), vec![]);
        assert_eq!(r.yield_quantity(), r2.yield_quantity());
        assert_eq!(r.name(), r2.name());
    }

    #[test]
    fn ingredient_resolves_to_the_right_source_kind() {
        let item_id = ItemId::new();
        let ing = RecipeIngredient {
            source_type: SourceType::Inventory,
            source_id: item_id.into_uuid(),
            quantity: dec!(1),
            unit: "g".into(),
            name_snapshot: "flour".into(),
            cost_per_unit: dec!(0.01),
        };
        assert_eq!(ing.source_item_id(), Some(item_id));
        assert_eq!(ing.source_recipe_id(), None);
    }
}
