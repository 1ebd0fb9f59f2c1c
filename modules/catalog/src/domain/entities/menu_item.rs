// MenuItem entity - a customer-facing sellable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::{MenuCategoryId, MenuItemId};
use inventory::RecipeId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    tenant_id: TenantId,
    name: String,
    slug: String,
    recipe_id: Option<RecipeId>,
    base_price: Decimal,
    price_includes_tax: bool,
    currency: String,
    category_id: Option<MenuCategoryId>,
    active: bool,
}

impl MenuItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tenant_id: TenantId,
        name: String,
        slug: String,
        recipe_id: Option<RecipeId>,
        base_price: Decimal,
        price_includes_tax: bool,
        currency: String,
        category_id: Option<MenuCategoryId>,
    ) -> Self {
        Self {
            id: MenuItemId::new(),
            tenant_id,
            name,
            slug,
            recipe_id,
            base_price,
            price_includes_tax,
            currency,
            category_id,
            active: true,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: MenuItemId,
        tenant_id: TenantId,
        name: String,
        slug: String,
        recipe_id: Option<RecipeId>,
        base_price: Decimal,
        price_includes_tax: bool,
        currency: String,
        category_id: Option<MenuCategoryId>,
        active: bool,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            slug,
            recipe_id,
            base_price,
            price_includes_tax,
            currency,
            category_id,
            active,
        }
    }

    pub fn id(&self) -> MenuItemId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn recipe_id(&self) -> Option<RecipeId> {
        self.recipe_id
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn price_includes_tax(&self) -> bool {
        self.price_includes_tax
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn category_id(&self) -> Option<MenuCategoryId> {
        self.category_id
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn retire(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_menu_item_starts_active() {
        let item = MenuItem::new(
            TenantId::new(),
            "Pizza".into(),
            "pizza".into(),
            None,
            Decimal::new(1000, 2),
            false,
            "SAR".into(),
            None,
        );
        assert!(item.active());
    }
}
