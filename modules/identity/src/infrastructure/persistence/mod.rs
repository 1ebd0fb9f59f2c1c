mod pg_actor_repository;
mod pg_pin_credential_repository;

pub use pg_actor_repository::PgActorRepository;
pub use pg_pin_credential_repository::PgPinCredentialRepository;
