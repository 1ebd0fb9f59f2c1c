mod commands;
mod responses;

pub use commands::{CashCountInput, CloseTillCommand, ListTillSessionsQuery, OpenTillCommand};
pub use responses::{CashCountResponse, TillSessionListResponse, TillSessionResponse};
