mod pg_branch_repository;
mod pg_order_number_generator;
mod pg_pos_terminal_repository;

pub use pg_branch_repository::PgBranchRepository;
pub use pg_order_number_generator::PgOrderNumberGenerator;
pub use pg_pos_terminal_repository::PgPosTerminalRepository;
