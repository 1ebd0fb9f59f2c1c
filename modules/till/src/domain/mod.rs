//! Domain layer for the till module: the till-session lifecycle (spec 4.5).
//!
//! - `entities`: `TillSession`
//! - `value_objects`: `TillSessionId`, `TillSessionStatus`
//! - `repositories`: `TillSessionRepository`, `TillOrderLedgerReader`

pub mod entities;
pub mod repositories;
pub mod value_objects;
