// MenuCategory entity - groups MenuItems for display. Authoring (create/
// rename/reorder) is out of core scope; this type exists so `MenuItem`'s
// `categoryId` and `BranchMenu`'s `categoryIdSnapshot` are real references.

use serde::{Deserialize, Serialize};
use tenancy::TenantId;

use crate::domain::value_objects::MenuCategoryId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    id: MenuCategoryId,
    tenant_id: TenantId,
    name: String,
    display_order: i32,
}

impl MenuCategory {
    pub fn new(tenant_id: TenantId, name: String, display_order: i32) -> Self {
        Self {
            id: MenuCategoryId::new(),
            tenant_id,
            name,
            display_order,
        }
    }

    pub fn reconstitute(id: MenuCategoryId, tenant_id: TenantId, name: String, display_order: i32) -> Self {
        Self {
            id,
            tenant_id,
            name,
            display_order,
        }
    }

    pub fn id(&self) -> MenuCategoryId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }
}
