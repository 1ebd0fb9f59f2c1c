// BranchInventory entity - a (branchId, itemId) stock row, mutated only by
// the BranchInventoryLedger (reserve / deduct / release).

use identity::BranchId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchInventory {
    branch_id: BranchId,
    item_id: ItemId,
    on_hand_qty: Decimal,
    reorder_point: Decimal,
    min_stock: Decimal,
    max_stock: Option<Decimal>,
    cost_per_unit: Decimal,
    selling_price: Option<Decimal>,
    active: bool,
}

impl BranchInventory {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        branch_id: BranchId,
        item_id: ItemId,
        on_hand_qty: Decimal,
        reorder_point: Decimal,
        min_stock: Decimal,
        max_stock: Option<Decimal>,
        cost_per_unit: Decimal,
        selling_price: Option<Decimal>,
    ) -> Self {
        Self {
            branch_id,
            item_id,
            on_hand_qty,
            reorder_point,
            min_stock,
            max_stock,
            cost_per_unit,
            selling_price,
            active: true,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        branch_id: BranchId,
        item_id: ItemId,
        on_hand_qty: Decimal,
        reorder_point: Decimal,
        min_stock: Decimal,
        max_stock: Option<Decimal>,
        cost_per_unit: Decimal,
        selling_price: Option<Decimal>,
        active: bool,
    ) -> Self {
        Self {
            branch_id,
            item_id,
            on_hand_qty,
            reorder_point,
            min_stock,
            max_stock,
            cost_per_unit,
            selling_price,
            active,
        }
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn on_hand_qty(&self) -> Decimal {
        self.on_hand_qty
    }

    pub fn reorder_point(&self) -> Decimal {
        self.reorder_point
    }

    pub fn min_stock(&self) -> Decimal {
        self.min_stock
    }

    pub fn max_stock(&self) -> Option<Decimal> {
        self.max_stock
    }

    pub fn cost_per_unit(&self) -> Decimal {
        self.cost_per_unit
    }

    pub fn selling_price(&self) -> Option<Decimal> {
        self.selling_price
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn is_low_stock(&self) -> bool {
        self.on_hand_qty <= self.reorder_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn low_stock_is_flagged_at_reorder_point() {
        let row = BranchInventory::new(
            BranchId::new(),
            ItemId::new(),
            dec!(10),
            dec!(10),
            dec!(5),
            None,
            dec!(0.5),
            None,
        );
        assert!(row.is_low_stock());
    }
}
