mod pin_login_use_case;

pub use pin_login_use_case::{PinLoginCommand, PinLoginOutcome, PinLoginUseCase};
