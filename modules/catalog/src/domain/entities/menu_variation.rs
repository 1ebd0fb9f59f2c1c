// MenuVariation entity - a sellable option on a menu item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MenuItemId, MenuVariationId};
use inventory::{RecipeVariantId, VariantType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuVariation {
    id: MenuVariationId,
    menu_item_id: MenuItemId,
    name: String,
    variant_type: VariantType,
    recipe_variant_id: Option<RecipeVariantId>,
    price_delta: Decimal,
    /// Display-only; the active multiplier at costing time comes from the
    /// linked RecipeVariant (spec 3: "sizeMultiplier (display)").
    size_multiplier: Decimal,
    /// Snapshot used when `recipe_variant_id` is unset (spec 4.2).
    calculated_cost: Decimal,
}

impl MenuVariation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        menu_item_id: MenuItemId,
        name: String,
        variant_type: VariantType,
        recipe_variant_id: Option<RecipeVariantId>,
        price_delta: Decimal,
        size_multiplier: Decimal,
        calculated_cost: Decimal,
    ) -> Self {
        Self {
            id: MenuVariationId::new(),
            menu_item_id,
            name,
            variant_type,
            recipe_variant_id,
            price_delta,
            size_multiplier,
            calculated_cost,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MenuVariationId,
        menu_item_id: MenuItemId,
        name: String,
        variant_type: VariantType,
        recipe_variant_id: Option<RecipeVariantId>,
        price_delta: Decimal,
        size_multiplier: Decimal,
        calculated_cost: Decimal,
    ) -> Self {
        Self {
            id,
            menu_item_id,
            name,
            variant_type,
            recipe_variant_id,
            price_delta,
            size_multiplier,
            calculated_cost,
        }
    }

    pub fn id(&self) -> MenuVariationId {
        self.id
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    pub fn recipe_variant_id(&self) -> Option<RecipeVariantId> {
        self.recipe_variant_id
    }

    pub fn price_delta(&self) -> Decimal {
        self.price_delta
    }

    pub fn size_multiplier(&self) -> Decimal {
        self.size_multiplier
    }

    pub fn calculated_cost(&self) -> Decimal {
        self.calculated_cost
    }

    pub fn is_size(&self) -> bool {
        self.variant_type.is_size()
    }
}
