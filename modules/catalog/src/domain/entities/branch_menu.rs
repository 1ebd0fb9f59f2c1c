// BranchMenu entity - a per-(branch, menuItem) override of price and
// availability, carrying snapshots so a branch listing never has to join
// back to the authoring-time MenuItem/MenuCategory.

use identity::BranchId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MenuCategoryId, MenuItemId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchMenu {
    branch_id: BranchId,
    menu_item_id: MenuItemId,
    selling_price: Option<Decimal>,
    available: bool,
    visible_on_pos: bool,
    display_order: i32,
    code_snapshot: String,
    name_snapshot: String,
    category_id_snapshot: Option<MenuCategoryId>,
}

impl BranchMenu {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        branch_id: BranchId,
        menu_item_id: MenuItemId,
        selling_price: Option<Decimal>,
        available: bool,
        visible_on_pos: bool,
        display_order: i32,
        code_snapshot: String,
        name_snapshot: String,
        category_id_snapshot: Option<MenuCategoryId>,
    ) -> Self {
        Self {
            branch_id,
            menu_item_id,
            selling_price,
            available,
            visible_on_pos,
            display_order,
            code_snapshot,
            name_snapshot,
            category_id_snapshot,
        }
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn selling_price(&self) -> Option<Decimal> {
        self.selling_price
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn visible_on_pos(&self) -> bool {
        self.visible_on_pos
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    pub fn code_snapshot(&self) -> &str {
        &self.code_snapshot
    }

    pub fn name_snapshot(&self) -> &str {
        &self.name_snapshot
    }

    pub fn category_id_snapshot(&self) -> Option<MenuCategoryId> {
        self.category_id_snapshot
    }

    /// `sellingPrice ?? menuItem.basePrice` (spec 4.2).
    pub fn effective_price(&self, base_price: Decimal) -> Decimal {
        self.selling_price.unwrap_or(base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_falls_back_to_base_price() {
        let bm = BranchMenu::new(
            BranchId::new(),
            MenuItemId::new(),
            None,
            true,
            true,
            0,
            "pizza".into(),
            "Pizza".into(),
            None,
        );
        assert_eq!(bm.effective_price(Decimal::new(1000, 2)), Decimal::new(1000, 2));
    }

    #[test]
    fn effective_price_prefers_override() {
        let bm = BranchMenu::new(
            BranchId::new(),
            MenuItemId::new(),
            Some(Decimal::new(1200, 2)),
            true,
            true,
            0,
            "pizza".into(),
            "Pizza".into(),
            None,
        );
        assert_eq!(bm.effective_price(Decimal::new(1000, 2)), Decimal::new(1200, 2));
    }
}
