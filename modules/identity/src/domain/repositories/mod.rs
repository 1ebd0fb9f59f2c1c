mod actor_repository;
mod pin_credential_repository;

pub use actor_repository::ActorRepository;
pub use pin_credential_repository::PinCredentialRepository;
