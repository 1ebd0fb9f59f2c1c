// InventoryItem entity - a stocked, non-stocked, or service material.

use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::{ItemId, ItemType, Sku};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    tenant_id: TenantId,
    name: String,
    sku: Sku,
    item_type: ItemType,
    base_unit: String,
    category_id: Option<uuid::Uuid>,
    active: bool,
}

impl InventoryItem {
    pub fn new(
        tenant_id: TenantId,
        name: String,
        sku: Sku,
        item_type: ItemType,
        base_unit: String,
        category_id: Option<uuid::Uuid>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            tenant_id,
            name,
            sku,
            item_type,
            base_unit,
            category_id,
            active: true,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ItemId,
        tenant_id: TenantId,
        name: String,
        sku: Sku,
        item_type: ItemType,
        base_unit: String,
        category_id: Option<uuid::Uuid>,
        active: bool,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            sku,
            item_type,
            base_unit,
            category_id,
            active,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn base_unit(&self) -> &str {
        &self.base_unit
    }

    pub fn category_id(&self) -> Option<uuid::Uuid> {
        self.category_id
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Soft-delete: retire from authoring without removing ledger history.
    pub fn retire(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_active() {
        let item = InventoryItem::new(
            TenantId::new(),
            "Mozzarella".into(),
            Sku::from_string("PRD-DAI-0001".into()),
            ItemType::Stock,
            "g".into(),
            None,
        );
        assert!(item.active());
    }

    #[test]
    fn retire_flips_active_off() {
        let mut item = InventoryItem::new(
            TenantId::new(),
            "Mozzarella".into(),
            Sku::from_string("PRD-DAI-0001".into()),
            ItemType::Stock,
            "g".into(),
            None,
        );
        item.retire();
        assert!(!item.active());
    }
}
