// Demo data for a single tenant: one branch, two staff members, a
// pizza recipe with a size and a topping variant, and the branch menu
// entry that prices it. Mirrors the literal scenario this workspace's
// pricing/costing tests are built against.

pub const TENANT_KEY: &str = "macd";
pub const TENANT_SCHEMA: &str = "macd";

pub struct BranchSeed {
    pub name: &'static str,
    pub code: &'static str,
    pub currency: &'static str,
    pub tax_mode: &'static str,
    pub tax_rate: &'static str,
    pub vat_number: Option<&'static str>,
    pub order_prefix: &'static str,
    pub receipt_footer: Option<&'static str>,
}

pub const BRANCH: BranchSeed = BranchSeed {
    name: "Downtown",
    code: "B1",
    currency: "SAR",
    tax_mode: "exclusive",
    tax_rate: "15",
    vat_number: Some("300000000000003"),
    order_prefix: "DT",
    receipt_footer: Some("Shukran for visiting our Downtown branch"),
};

pub struct TerminalSeed {
    pub machine_id: &'static str,
    pub name: &'static str,
}

pub const TERMINAL: TerminalSeed = TerminalSeed {
    machine_id: "POS-1",
    name: "Front Counter",
};

pub struct StaffSeed {
    pub name: &'static str,
    pub pin: &'static str,
}

pub const MANAGER: StaffSeed = StaffSeed {
    name: "Amal Al-Harbi",
    pin: "1379",
};

pub const CASHIER: StaffSeed = StaffSeed {
    name: "Yousef Al-Qahtani",
    pin: "2468",
};

pub struct ItemSeed {
    pub name: &'static str,
    pub sku: &'static str,
    pub base_unit: &'static str,
    pub on_hand_qty: &'static str,
    pub reorder_point: &'static str,
    pub min_stock: &'static str,
    pub max_stock: &'static str,
    pub cost_per_unit: &'static str,
}

pub const DOUGH: ItemSeed = ItemSeed {
    name: "Pizza Dough",
    sku: "ING-DOUGH-001",
    base_unit: "g",
    on_hand_qty: "20000",
    reorder_point: "5000",
    min_stock: "2000",
    max_stock: "50000",
    cost_per_unit: "0.015",
};

pub const PEPPERONI: ItemSeed = ItemSeed {
    name: "Pepperoni Slices",
    sku: "ING-PEPPERONI-001",
    base_unit: "g",
    on_hand_qty: "8000",
    reorder_point: "2000",
    min_stock: "1000",
    max_stock: "20000",
    cost_per_unit: "0.02",
};

pub const MENU_CATEGORY_NAME: &str = "Pizzas";

pub struct RecipeSeed {
    pub name: &'static str,
    pub yield_quantity: &'static str,
    pub ingredient_qty: &'static str,
}

/// One unit yields a 200g dough base.
pub const PIZZA_BASE_RECIPE: RecipeSeed = RecipeSeed {
    name: "Pizza Base",
    yield_quantity: "1",
    ingredient_qty: "200",
};

pub struct SizeVariantSeed {
    pub name: &'static str,
    pub size_multiplier: &'static str,
    pub price_delta: &'static str,
}

pub const LARGE: SizeVariantSeed = SizeVariantSeed {
    name: "Large",
    size_multiplier: "1.5",
    price_delta: "5.00",
};

pub struct ToppingVariantSeed {
    pub name: &'static str,
    pub price_delta: &'static str,
    pub ingredient_qty: &'static str,
}

/// Adds 50g of pepperoni on top of whatever size was selected.
pub const PEPPERONI_TOPPING: ToppingVariantSeed = ToppingVariantSeed {
    name: "Pepperoni",
    price_delta: "2.00",
    ingredient_qty: "50",
};

pub struct MenuItemSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub base_price: &'static str,
}

pub const PIZZA_MENU_ITEM: MenuItemSeed = MenuItemSeed {
    name: "Classic Pizza",
    slug: "classic-pizza",
    base_price: "10.00",
};
