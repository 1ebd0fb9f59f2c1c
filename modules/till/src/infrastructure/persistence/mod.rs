//! PostgreSQL persistence implementation for the till module.

mod pg_till_session_repository;

pub use pg_till_session_repository::PgTillSessionRepository;
