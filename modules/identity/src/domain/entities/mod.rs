mod actor_context;
mod pin_credential;

pub use actor_context::{ActorContext, ActorStatus};
pub use pin_credential::{validate_pin_format, PinCredential, PinCredentialId};
