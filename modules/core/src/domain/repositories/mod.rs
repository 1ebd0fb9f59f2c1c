mod branch_repository;
mod order_number_generator;
mod pos_terminal_repository;

pub use branch_repository::BranchRepository;
pub use order_number_generator::OrderNumberGenerator;
pub use pos_terminal_repository::PosTerminalRepository;
