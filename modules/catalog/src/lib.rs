// Catalog module - the sellable menu, branch-level pricing overrides, and
// the order-commit transaction (spec 4.2, 4.6).
//
// Clean Architecture layers:
// - domain: entities, value objects, repository ports, the pricing engine
// - application: the commit-order use case and its DTOs
// - infrastructure: PostgreSQL adapters
//
// Menu/category authoring CRUD is out of core scope (spec 1); this crate
// carries the read side those flows need plus the order-commit write path.

pub mod application;
pub mod domain;
pub mod infrastructure;

mod error;

pub use error::{CatalogError, ErrorKind};

pub use domain::entities::{
    BranchMenu, MenuCategory, MenuItem, MenuVariation, Order, OrderLine, OrderPayment, OrderTotals, PricingSnapshot,
    SelectedVariationSnapshot,
};

pub use domain::value_objects::{
    MenuCategoryId, MenuItemId, MenuVariationId, OrderId, OrderPaymentMethod, OrderStatus,
};

pub use domain::repositories::{
    BranchMenuRepository, IdempotencyRecordRepository, MenuItemRepository, MenuVariationRepository, OrderRepository,
};

pub use domain::services::{PricedLine, PricingEngine};

pub use application::dtos::{CommitOrderCommand, CommitOrderLine, CommitOrderOutcome};
pub use application::use_cases::CommitOrderUseCase;

pub use infrastructure::persistence::{
    PgBranchMenuRepository, PgIdempotencyRecordRepository, PgMenuItemRepository, PgMenuVariationRepository,
    PgOrderRepository,
};
