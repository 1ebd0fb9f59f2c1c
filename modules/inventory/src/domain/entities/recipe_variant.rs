// RecipeVariant entity - a size/flavor/addon variant of a base Recipe.
//
// Resolvable only against its parent recipe's graph (spec 3): the engine
// never flattens a RecipeVariant without the Recipe it points at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::entities::recipe::RecipeIngredient;
use crate::domain::value_objects::{RecipeId, RecipeVariantId, VariantType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeVariant {
    id: RecipeVariantId,
    tenant_id: TenantId,
    recipe_id: RecipeId,
    variant_type: VariantType,
    /// Multiplies the base recipe's entire flattened leaf set when variant_type = Size.
    size_multiplier: Decimal,
    base_cost_adjustment: Decimal,
    ingredients: Vec<RecipeIngredient>,
}

impl RecipeVariant {
    pub fn new(
        tenant_id: TenantId,
        recipe_id: RecipeId,
        variant_type: VariantType,
        size_multiplier: Decimal,
        base_cost_adjustment: Decimal,
        ingredients: Vec<RecipeIngredient>,
    ) -> Self {
        Self {
            id: RecipeVariantId::new(),
            tenant_id,
            recipe_id,
            variant_type,
            size_multiplier,
            base_cost_adjustment,
            ingredients,
        }
    }

    pub fn reconstitute(
        id: RecipeVariantId,
        tenant_id: TenantId,
        recipe_id: RecipeId,
        variant_type: VariantType,
        size_multiplier: Decimal,
        base_cost_adjustment: Decimal,
        ingredients: Vec<RecipeIngredient>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            recipe_id,
            variant_type,
            size_multiplier,
            base_cost_adjustment,
            ingredients,
        }
    }

    pub fn id(&self) -> RecipeVariantId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn recipe_id(&self) -> RecipeId {
        self.recipe_id
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    pub fn size_multiplier(&self) -> Decimal {
        self.size_multiplier
    }

    pub fn base_cost_adjustment(&self) -> Decimal {
        self.base_cost_adjustment
    }

    pub fn ingredients(&self) -> &[RecipeIngredient] {
        &self.ingredients
    }
}

/// Default size multiplier for a newly-authored variant (spec 3: "default 1").
pub fn default_size_multiplier() -> Decimal {
    Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn size_variant_multiplier_is_one_by_default() {
        let v = RecipeVariant::new(
            TenantId::new(),
            RecipeId::new(),
            VariantType::Size,
            default_size_multiplier(),
            Decimal::ZERO,
            vec![],
        );
        assert_eq!(v.size_multiplier(), dec!(1));
        assert!(v.variant_type().is_size());
    }
}
