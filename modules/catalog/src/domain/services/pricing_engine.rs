// PricingEngine - resolves a line's unit price, unit cost, effective
// recipe-flattening multiplier, and the additional inventory requirements
// its selected variations contribute (spec 4.2).
//
// Pure: takes already-loaded entities and a `RecipeGraph` lookup, no I/O.
// Composed with `RecipeCostEngine` (4.1) for the base recipe and for any
// selected variation that carries its own `recipeVariantId`.

use std::collections::HashMap;

use rust_decimal::Decimal;

use inventory::{FlattenedRecipe, InventoryError, LeafRequirement, RecipeCostEngine, RecipeGraph, RecipeVariant, RecipeVariantId};

use crate::domain::entities::{BranchMenu, MenuItem, MenuVariation};
use crate::CatalogError;

/// Result of pricing and costing one order line (spec 4.2 contract).
#[derive(Debug, Clone, Default)]
pub struct PricedLine {
    pub unit_price: Decimal,
    pub unit_cost: Decimal,
    /// `quantity * size_variation.size_multiplier` (1 if no size variation
    /// was selected), per spec 4.1's "effective multiplier" rule.
    pub effective_multiplier: Decimal,
    /// Leaf inventory requirements for one line at `quantity`, already
    /// scaled - ready to be merged additively across the order's lines.
    pub requirements: Vec<LeafRequirement>,
}

pub struct PricingEngine;

impl PricingEngine {
    /// `recipe_variants` must contain every `RecipeVariantId` referenced by
    /// `selected`; the caller resolves them in bulk (mirrors how
    /// `recipe_graph` is a bulk-loaded, per-request lookup too).
    pub fn price_line(
        menu_item: &MenuItem,
        branch_menu: &BranchMenu,
        quantity: Decimal,
        selected: &[MenuVariation],
        recipe_variants: &HashMap<RecipeVariantId, RecipeVariant>,
        recipe_graph: &dyn RecipeGraph,
    ) -> Result<PricedLine, CatalogError> {
        Self::validate_selection(menu_item, selected)?;

        let unit_price = Self::price(menu_item, branch_menu, selected)?;

        let size_variant = Self::resolve_size_variant(menu_item, selected, recipe_variants)?;
        let effective_multiplier = quantity * size_variant.map(|v| v.size_multiplier()).unwrap_or(Decimal::ONE);

        let mut flattened = match menu_item.recipe_id() {
            Some(recipe_id) => RecipeCostEngine::flatten(recipe_id, effective_multiplier, recipe_graph)?,
            None => FlattenedRecipe::default(),
        };

        for variation in selected {
            if variation.is_size() {
                continue;
            }
            match variation.recipe_variant_id() {
                Some(variant_id) => {
                    let variant = recipe_variants
                        .get(&variant_id)
                        .ok_or(InventoryError::RecipeVariantNotFound(variant_id.into_uuid()))?;
                    Self::check_variant_belongs_to_item(menu_item, variation, variant)?;
                    let additional = RecipeCostEngine::flatten_variant(variant, effective_multiplier, recipe_graph)?;
                    flattened.leaves.extend(additional.leaves);
                    flattened.total_cost += additional.total_cost;
                }
                None => {
                    // Authoring without a linked variant: fall back to the
                    // snapshot cost, no additional ingredient requirements.
                    flattened.total_cost += variation.calculated_cost() * quantity;
                }
            }
        }

        Ok(PricedLine {
            unit_price,
            unit_cost: flattened.total_cost,
            effective_multiplier,
            requirements: flattened.leaves,
        })
    }

    /// `unitPrice = branchMenu.sellingPrice ?? menuItem.basePrice` plus the
    /// algebraic sum of `priceDelta` over selected variations.
    fn price(menu_item: &MenuItem, branch_menu: &BranchMenu, selected: &[MenuVariation]) -> Result<Decimal, CatalogError> {
        let base = branch_menu.effective_price(menu_item.base_price());
        let delta: Decimal = selected.iter().map(|v| v.price_delta()).sum();
        let price = base + delta;
        if price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice(price));
        }
        Ok(price)
    }

    fn validate_selection(menu_item: &MenuItem, selected: &[MenuVariation]) -> Result<(), CatalogError> {
        for variation in selected {
            if variation.menu_item_id() != menu_item.id() {
                return Err(CatalogError::VariationBelongsToOtherMenuItem {
                    variation_id: variation.id().into_uuid(),
                });
            }
        }

        if selected.iter().filter(|v| v.is_size()).count() > 1 {
            return Err(CatalogError::DuplicateSizeVariation);
        }

        Ok(())
    }

    fn resolve_size_variant<'a>(
        menu_item: &MenuItem,
        selected: &[MenuVariation],
        recipe_variants: &'a HashMap<RecipeVariantId, RecipeVariant>,
    ) -> Result<Option<&'a RecipeVariant>, CatalogError> {
        let Some(size) = selected.iter().find(|v| v.is_size()) else {
            return Ok(None);
        };

        match size.recipe_variant_id() {
            Some(id) => {
                let variant = recipe_variants
                    .get(&id)
                    .ok_or(InventoryError::RecipeVariantNotFound(id.into_uuid()))?;
                Self::check_variant_belongs_to_item(menu_item, size, variant)?;
                Ok(Some(variant))
            }
            // A size variation authored without a linked RecipeVariant
            // scales nothing (spec: calculatedCost snapshot path).
            None => Ok(None),
        }
    }

    /// A variation's `recipeVariantId`, if set, must belong to the menu
    /// item's recipeId (spec 4.2).
    fn check_variant_belongs_to_item(
        menu_item: &MenuItem,
        variation: &MenuVariation,
        variant: &RecipeVariant,
    ) -> Result<(), CatalogError> {
        if Some(variant.recipe_id()) != menu_item.recipe_id() {
            return Err(CatalogError::VariantRecipeMismatch {
                variation_id: variation.id().into_uuid(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity::BranchId;
    use inventory::{Recipe, RecipeId, RecipeIngredient, SourceType, VariantType};
    use rust_decimal_macros::dec;
    use tenancy::TenantId;

    struct FakeGraph(HashMap<RecipeId, Recipe>);

    impl RecipeGraph for FakeGraph {
        fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
            self.0.get(&id)
        }
    }

    fn pizza_ingredient(item_id: inventory::ItemId) -> RecipeIngredient {
        RecipeIngredient {
            source_type: SourceType::Inventory,
            source_id: item_id.into_uuid(),
            quantity: dec!(200),
            unit: "g".into(),
            name_snapshot: "dough".into(),
            cost_per_unit: dec!(0.015),
        }
    }

    fn menu_item_with_recipe(recipe_id: RecipeId) -> crate::domain::entities::MenuItem {
        crate::domain::entities::MenuItem::new(
            TenantId::new(),
            "Pizza".into(),
            "pizza".into(),
            Some(recipe_id),
            dec!(10.00),
            false,
            "SAR".into(),
            None,
        )
    }

    #[test]
    fn happy_path_pizza_matches_literal_scenario() {
        let item_id = inventory::ItemId::new();
        let tenant_id = TenantId::new();
        let recipe = Recipe::new(tenant_id, "Pizza base".into(), dec!(1), vec![pizza_ingredient(item_id)]);
        let recipe_id = recipe.id();

        let mut graph = HashMap::new();
        graph.insert(recipe_id, recipe);
        let graph = FakeGraph(graph);

        let menu_item = menu_item_with_recipe(recipe_id);
        let branch_menu = BranchMenu::new(
            BranchId::new(),
            menu_item.id(),
            None,
            true,
            true,
            0,
            "pizza".into(),
            "Pizza".into(),
            None,
        );

        let large = crate::domain::entities::MenuVariation::new(
            menu_item.id(),
            "Large".into(),
            VariantType::Size,
            None,
            dec!(5.00),
            dec!(1.5),
            dec!(0),
        );
        let pepperoni = crate::domain::entities::MenuVariation::new(
            menu_item.id(),
            "Pepperoni".into(),
            VariantType::Addon,
            None,
            dec!(2.00),
            dec!(1),
            dec!(1.00),
        );

        let priced = PricingEngine::price_line(
            &menu_item,
            &branch_menu,
            dec!(1),
            &[large, pepperoni],
            &HashMap::new(),
            &graph,
        )
        .unwrap();

        assert_eq!(priced.unit_price, dec!(17.00));
        assert_eq!(priced.effective_multiplier, dec!(1.5));
        // base recipe flattened at 1.5x plus the pepperoni snapshot cost (no linked variant)
        assert_eq!(priced.unit_cost, dec!(3.00) * dec!(1.5) + dec!(1.00));
        assert_eq!(priced.requirements.len(), 1);
        assert_eq!(priced.requirements[0].qty_in_base_units, dec!(300));
    }

    #[test]
    fn rejects_variation_belonging_to_another_menu_item() {
        let item_id = inventory::ItemId::new();
        let tenant_id = TenantId::new();
        let recipe = Recipe::new(tenant_id, "Pizza base".into(), dec!(1), vec![pizza_ingredient(item_id)]);
        let recipe_id = recipe.id();
        let mut map = HashMap::new();
        map.insert(recipe_id, recipe);
        let graph = FakeGraph(map);

        let menu_item = menu_item_with_recipe(recipe_id);
        let branch_menu = BranchMenu::new(
            BranchId::new(),
            menu_item.id(),
            None,
            true,
            true,
            0,
            "pizza".into(),
            "Pizza".into(),
            None,
        );

        let foreign = crate::domain::entities::MenuVariation::new(
            crate::domain::value_objects::MenuItemId::new(),
            "Large".into(),
            VariantType::Size,
            None,
            dec!(5.00),
            dec!(1.5),
            dec!(0),
        );

        let err = PricingEngine::price_line(&menu_item, &branch_menu, dec!(1), &[foreign], &HashMap::new(), &graph)
            .unwrap_err();
        assert!(matches!(err, CatalogError::VariationBelongsToOtherMenuItem { .. }));
    }

    #[test]
    fn rejects_two_size_variations_on_one_line() {
        let item_id = inventory::ItemId::new();
        let tenant_id = TenantId::new();
        let recipe = Recipe::new(tenant_id, "Pizza base".into(), dec!(1), vec![pizza_ingredient(item_id)]);
        let recipe_id = recipe.id();
        let mut map = HashMap::new();
        map.insert(recipe_id, recipe);
        let graph = FakeGraph(map);

        let menu_item = menu_item_with_recipe(recipe_id);
        let branch_menu = BranchMenu::new(
            BranchId::new(),
            menu_item.id(),
            None,
            true,
            true,
            0,
            "pizza".into(),
            "Pizza".into(),
            None,
        );

        let large = crate::domain::entities::MenuVariation::new(
            menu_item.id(),
            "Large".into(),
            VariantType::Size,
            None,
            dec!(5.00),
            dec!(1.5),
            dec!(0),
        );
        let xl = crate::domain::entities::MenuVariation::new(
            menu_item.id(),
            "XL".into(),
            VariantType::Size,
            None,
            dec!(8.00),
            dec!(2),
            dec!(0),
        );

        let err = PricingEngine::price_line(&menu_item, &branch_menu, dec!(1), &[large, xl], &HashMap::new(), &graph)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSizeVariation));
    }

    #[test]
    fn rejects_negative_unit_price() {
        let menu_item = crate::domain::entities::MenuItem::new(
            TenantId::new(),
            "Discount item".into(),
            "discount".into(),
            None,
            dec!(1.00),
            false,
            "SAR".into(),
            None,
        );
        let branch_menu = BranchMenu::new(
            BranchId::new(),
            menu_item.id(),
            None,
            true,
            true,
            0,
            "discount".into(),
            "Discount item".into(),
            None,
        );
        let huge_discount = crate::domain::entities::MenuVariation::new(
            menu_item.id(),
            "Huge discount".into(),
            VariantType::Addon,
            None,
            dec!(-5.00),
            dec!(1),
            dec!(0),
        );

        let graph = FakeGraph(HashMap::new());
        let err = PricingEngine::price_line(
            &menu_item,
            &branch_menu,
            dec!(1),
            &[huge_discount],
            &HashMap::new(),
            &graph,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice(_)));
    }
}
