//! Till session lifecycle use cases (spec 4.5).

mod close_till_use_case;
mod get_current_till_use_case;
mod list_till_sessions_use_case;
mod open_till_use_case;

pub use close_till_use_case::CloseTillUseCase;
pub use get_current_till_use_case::GetCurrentTillUseCase;
pub use list_till_sessions_use_case::ListTillSessionsUseCase;
pub use open_till_use_case::OpenTillUseCase;
