//! Till session command DTOs (spec 4.5).

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// One cash-denomination count entered by the cashier (spec 3 `cashCounts`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CashCountInput {
    pub denomination: Decimal,
    pub count: i64,
}

/// Command to open a new till session.
#[derive(Debug, Deserialize)]
pub struct OpenTillCommand {
    pub branch_id: Uuid,
    pub terminal_id: Option<Uuid>,
    pub opening_amount: Decimal,
    #[serde(default)]
    pub cash_counts: Vec<CashCountInput>,
    pub notes: Option<String>,
}

/// Command to close an open till session.
#[derive(Debug, Deserialize)]
pub struct CloseTillCommand {
    pub till_session_id: Uuid,
    pub declared_closing_amount: Decimal,
    #[serde(default)]
    pub cash_counts: Vec<CashCountInput>,
    pub notes: Option<String>,
}

/// Filter for listing till sessions.
#[derive(Debug, Default, Deserialize)]
pub struct ListTillSessionsQuery {
    pub branch_id: Option<Uuid>,
    pub terminal_id: Option<Uuid>,
    pub staff_id: Option<Uuid>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
