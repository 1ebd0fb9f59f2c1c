//! Domain entities for the till module: a cashier's open cash drawer for a
//! branch/terminal interval (spec 3 `TillSession`, spec 4.5).

mod till_session;

pub use till_session::{CashCount, TillSession};
