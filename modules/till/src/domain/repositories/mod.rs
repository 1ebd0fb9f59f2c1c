//! Repository traits for the till domain.

mod till_session_repository;

pub use till_session_repository::{TillOrderLedgerReader, TillSessionFilter, TillSessionRepository};
