// PostgreSQL repository adapters for the catalog module

mod pg_branch_menu_repository;
mod pg_idempotency_record_repository;
mod pg_menu_item_repository;
mod pg_menu_variation_repository;
mod pg_order_repository;

pub use pg_branch_menu_repository::PgBranchMenuRepository;
pub use pg_idempotency_record_repository::PgIdempotencyRecordRepository;
pub use pg_menu_item_repository::PgMenuItemRepository;
pub use pg_menu_variation_repository::PgMenuVariationRepository;
pub use pg_order_repository::PgOrderRepository;
