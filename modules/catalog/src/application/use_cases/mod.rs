// Use cases for the catalog module

mod commit_order_use_case;

pub use commit_order_use_case::CommitOrderUseCase;
