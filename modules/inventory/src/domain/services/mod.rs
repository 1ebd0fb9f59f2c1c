mod recipe_cost_engine;

pub use recipe_cost_engine::{FlattenedRecipe, LeafRequirement, RecipeCostEngine, RecipeGraph};
