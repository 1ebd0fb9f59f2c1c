// Repository traits for the catalog module

mod branch_menu_repository;
mod idempotency_record_repository;
mod menu_item_repository;
mod menu_variation_repository;
mod order_repository;

pub use branch_menu_repository::BranchMenuRepository;
pub use idempotency_record_repository::IdempotencyRecordRepository;
pub use menu_item_repository::MenuItemRepository;
pub use menu_variation_repository::MenuVariationRepository;
pub use order_repository::OrderRepository;
