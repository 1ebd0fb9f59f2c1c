//! Application layer for the till module: DTOs and use cases for the
//! till-session lifecycle (spec 4.5).

pub mod dtos;
pub mod use_cases;
