//! DTOs (Data Transfer Objects) for the till module.
//!
//! Contains commands (inputs) and responses (outputs) for till-session
//! operations.

pub mod till;

pub use till::*;
