// RecipeCostEngine - pure depth-first recipe flattening and costing.
//
// No I/O: driven entirely by the `RecipeGraph` lookup trait so it is
// trivially testable without a database. Cycle detection uses an explicit
// path stack rather than relying on the call stack; sub-recipe results are
// memoized per traversal (never across requests).

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::entities::{Recipe, RecipeIngredient, RecipeVariant};
use crate::domain::value_objects::{ItemId, RecipeId, SourceType};
use crate::InventoryError;

/// Read-only view over the recipe graph the engine traverses.
pub trait RecipeGraph {
    fn recipe(&self, id: RecipeId) -> Option<&Recipe>;
}

/// One leaf inventory requirement produced by flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRequirement {
    pub item_id: ItemId,
    pub qty_in_base_units: Decimal,
    pub from_recipe_id: RecipeId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedRecipe {
    pub leaves: Vec<LeafRequirement>,
    pub total_cost: Decimal,
}

impl FlattenedRecipe {
    fn scaled(&self, multiplier: Decimal) -> Self {
        Self {
            leaves: self
                .leaves
                .iter()
                .map(|l| LeafRequirement {
                    item_id: l.item_id,
                    qty_in_base_units: l.qty_in_base_units * multiplier,
                    from_recipe_id: l.from_recipe_id,
                })
                .collect(),
            total_cost: self.total_cost * multiplier,
        }
    }
}

pub struct RecipeCostEngine;

impl RecipeCostEngine {
    /// Flattens `recipe_id` scaled by `qty` (a line quantity, or the active
    /// size multiplier, depending on the caller).
    pub fn flatten(
        recipe_id: RecipeId,
        qty: Decimal,
        graph: &dyn RecipeGraph,
    ) -> Result<FlattenedRecipe, InventoryError> {
        if qty < Decimal::ZERO {
            return Err(InventoryError::InvalidIngredientQuantity);
        }
        let mut memo = HashMap::new();
        let mut path = Vec::new();
        let per_unit = Self::flatten_one(recipe_id, graph, &mut path, &mut memo)?;
        Ok(per_unit.scaled(qty))
    }

    /// Flattens a RecipeVariant's own ingredient list, scaled by `qty` (the
    /// active size multiplier). Resolvable only against the graph the
    /// variant's parent recipe belongs to (spec 3); the caller is
    /// responsible for checking `variant.recipe_id()` against the menu
    /// item's recipe before calling this.
    pub fn flatten_variant(
        variant: &RecipeVariant,
        qty: Decimal,
        graph: &dyn RecipeGraph,
    ) -> Result<FlattenedRecipe, InventoryError> {
        if qty < Decimal::ZERO {
            return Err(InventoryError::InvalidIngredientQuantity);
        }
        let mut memo = HashMap::new();
        let mut path = vec![variant.recipe_id()];
        let flat = Self::flatten_ingredients(
            variant.recipe_id(),
            variant.ingredients(),
            Decimal::ONE,
            graph,
            &mut path,
            &mut memo,
        )?;
        Ok(flat.scaled(qty))
    }

    /// Flattens `recipe_id` for exactly one unit of its own yield, memoized.
    fn flatten_one(
        recipe_id: RecipeId,
        graph: &dyn RecipeGraph,
        path: &mut Vec<RecipeId>,
        memo: &mut HashMap<RecipeId, FlattenedRecipe>,
    ) -> Result<FlattenedRecipe, InventoryError> {
        if let Some(cached) = memo.get(&recipe_id) {
            return Ok(cached.clone());
        }
        if path.contains(&recipe_id) {
            let mut offending: Vec<_> = path.iter().map(|r| r.into_uuid()).collect();
            offending.push(recipe_id.into_uuid());
            return Err(InventoryError::RecipeCycleDetected { path: offending });
        }

        let recipe = graph
            .recipe(recipe_id)
            .ok_or_else(|| InventoryError::RecipeNotFound(recipe_id.into_uuid()))?;
        if recipe.yield_quantity() <= Decimal::ZERO {
            return Err(InventoryError::InvalidYieldQuantity);
        }

        path.push(recipe_id);
        let per_yield_unit = Decimal::ONE / recipe.yield_quantity();
        let result = Self::flatten_ingredients(recipe_id, recipe.ingredients(), per_yield_unit, graph, path, memo);
        path.pop();
        let result = result?;

        memo.insert(recipe_id, result.clone());
        Ok(result)
    }

    fn flatten_ingredients(
        owning_recipe_id: RecipeId,
        ingredients: &[RecipeIngredient],
        multiplier: Decimal,
        graph: &dyn RecipeGraph,
        path: &mut Vec<RecipeId>,
        memo: &mut HashMap<RecipeId, FlattenedRecipe>,
    ) -> Result<FlattenedRecipe, InventoryError> {
        let mut leaves = Vec::new();
        let mut total_cost = Decimal::ZERO;

        for ing in ingredients {
            if ing.quantity < Decimal::ZERO {
                return Err(InventoryError::InvalidIngredientQuantity);
            }
            let qty = ing.quantity * multiplier;

            match ing.source_type {
                SourceType::Inventory => {
                    let item_id = ing
                        .source_item_id()
                        .ok_or(InventoryError::InvalidSourceType)?;
                    total_cost += qty * ing.cost_per_unit;
                    leaves.push(LeafRequirement {
                        item_id,
                        qty_in_base_units: qty,
                        from_recipe_id: owning_recipe_id,
                    });
                }
                SourceType::Recipe => {
                    let sub_id = ing
                        .source_recipe_id()
                        .ok_or(InventoryError::InvalidSourceType)?;
                    let sub = Self::flatten_one(sub_id, graph, path, memo)?;
                    let scaled = sub.scaled(qty);
                    total_cost += scaled.total_cost;
                    leaves.extend(scaled.leaves);
                }
            }
        }

        Ok(FlattenedRecipe { leaves, total_cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ItemId, VariantType};
    use rust_decimal_macros::dec;
    use std::collections::HashMap as StdHashMap;
    use tenancy::TenantId;

    struct TestGraph(StdHashMap<RecipeId, Recipe>);

    impl RecipeGraph for TestGraph {
        fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
            self.0.get(&id)
        }
    }

    fn inventory_ingredient(item_id: ItemId, qty: Decimal, cost: Decimal) -> RecipeIngredient {
        RecipeIngredient {
            source_type: SourceType::Inventory,
            source_id: item_id.into_uuid(),
            quantity: qty,
            unit: "g".into(),
            name_snapshot: "ingredient".into(),
            cost_per_unit: cost,
        }
    }

    fn recipe_ingredient(recipe_id: RecipeId, qty: Decimal) -> RecipeIngredient {
        RecipeIngredient {
            source_type: SourceType::Recipe,
            source_id: recipe_id.into_uuid(),
            quantity: qty,
            unit: "unit".into(),
            name_snapshot: "sub-recipe".into(),
            cost_per_unit: Decimal::ZERO,
        }
    }

    #[test]
    fn flattens_a_single_level_recipe() {
        let item = ItemId::new();
        let recipe = Recipe::new(
            TenantId::new(),
            "Dough".into(),
            dec!(10),
            vec![inventory_ingredient(item, dec!(500), dec!(0.02))],
        );
        let recipe_id = recipe.id();
        let mut map = StdHashMap::new();
        map.insert(recipe_id, recipe);
        let graph = TestGraph(map);

        let flat = RecipeCostEngine::flatten(recipe_id, dec!(1), &graph).unwrap();
        // 500g / 10 yield = 50g per unit, at 0.02/g = 1.00 cost
        assert_eq!(flat.total_cost, dec!(1.00));
        assert_eq!(flat.leaves.len(), 1);
        assert_eq!(flat.leaves[0].qty_in_base_units, dec!(50));
    }

    #[test]
    fn scales_linearly_with_quantity() {
        let item = ItemId::new();
        let recipe = Recipe::new(
            TenantId::new(),
            "Dough".into(),
            dec!(1),
            vec![inventory_ingredient(item, dec!(50), dec!(0.02))],
        );
        let recipe_id = recipe.id();
        let mut map = StdHashMap::new();
        map.insert(recipe_id, recipe);
        let graph = TestGraph(map);

        let one = RecipeCostEngine::flatten(recipe_id, dec!(1), &graph).unwrap();
        let three = RecipeCostEngine::flatten(recipe_id, dec!(3), &graph).unwrap();
        assert_eq!(three.total_cost, one.total_cost * dec!(3));
        assert_eq!(three.leaves[0].qty_in_base_units, one.leaves[0].qty_in_base_units * dec!(3));
    }

    #[test]
    fn expands_sub_recipes_recursively() {
        let item = ItemId::new();
        let sauce = Recipe::new(
            TenantId::new(),
            "Sauce".into(),
            dec!(2),
            vec![inventory_ingredient(item, dec!(200), dec!(0.01))],
        );
        let sauce_id = sauce.id();
        let pizza = Recipe::new(
            TenantId::new(),
            "Pizza".into(),
            dec!(1),
            vec![recipe_ingredient(sauce_id, dec!(1))],
        );
        let pizza_id = pizza.id();

        let mut map = StdHashMap::new();
        map.insert(sauce_id, sauce);
        map.insert(pizza_id, pizza);
        let graph = TestGraph(map);

        let flat = RecipeCostEngine::flatten(pizza_id, dec!(1), &graph).unwrap();
        // Sauce yields 2 units per 200g @ 0.01 = 2.00 total, 1.00 per unit; pizza uses 1 unit.
        assert_eq!(flat.total_cost, dec!(1.00));
        assert_eq!(flat.leaves[0].qty_in_base_units, dec!(100));
    }

    #[test]
    fn detects_cycles_with_the_offending_path() {
        let a_id = RecipeId::new();
        let b_id = RecipeId::new();
        let c_id = RecipeId::new();

        let a = Recipe::reconstitute(a_id, TenantId::new(), "A".into(), dec!(1), vec![recipe_ingredient(b_id, dec!(1))]);
        let b = Recipe::reconstitute(b_id, TenantId::new(), "B".into(), dec!(1), vec![recipe_ingredient(c_id, dec!(1))]);
        let c = Recipe::reconstitute(c_id, TenantId::new(), "C".into(), dec!(1), vec![recipe_ingredient(a_id, dec!(1))]);

        let mut map = StdHashMap::new();
        map.insert(a_id, a);
        map.insert(b_id, b);
        map.insert(c_id, c);
        let graph = TestGraph(map);

        let err = RecipeCostEngine::flatten(a_id, dec!(1), &graph).unwrap_err();
        assert!(matches!(err, InventoryError::RecipeCycleDetected { .. }));
    }

    #[test]
    fn missing_recipe_surfaces_not_found() {
        let graph = TestGraph(StdHashMap::new());
        let err = RecipeCostEngine::flatten(RecipeId::new(), dec!(1), &graph).unwrap_err();
        assert!(matches!(err, InventoryError::RecipeNotFound(_)));
    }

    #[test]
    fn variant_ingredients_flatten_independent_of_parent_yield() {
        let item = ItemId::new();
        let recipe = Recipe::new(TenantId::new(), "Pizza".into(), dec!(1), vec![]);
        let variant = RecipeVariant::new(
            TenantId::new(),
            recipe.id(),
            VariantType::Flavor,
            dec!(1),
            Decimal::ZERO,
            vec![inventory_ingredient(item, dec!(50), dec!(0.02))],
        );
        let mut map = StdHashMap::new();
        map.insert(recipe.id(), recipe);
        let graph = TestGraph(map);

        let flat = RecipeCostEngine::flatten_variant(&variant, dec!(1.5), &graph).unwrap();
        assert_eq!(flat.leaves[0].qty_in_base_units, dec!(75));
        assert_eq!(flat.total_cost, dec!(1.50));
    }
}
