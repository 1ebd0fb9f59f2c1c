// Value objects for the core domain

mod branch_code;
mod terminal_code;
mod terminal_id;

pub use branch_code::BranchCode;
pub use terminal_code::TerminalCode;
pub use terminal_id::TerminalId;
