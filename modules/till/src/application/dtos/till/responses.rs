//! Till session response DTOs (spec 3, 4.5).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{CashCount, TillSession};

#[derive(Debug, Serialize)]
pub struct CashCountResponse {
    pub denomination: Decimal,
    pub count: i64,
}

impl From<CashCount> for CashCountResponse {
    fn from(c: CashCount) -> Self {
        Self {
            denomination: c.denomination,
            count: c.count,
        }
    }
}

/// Response for a till session.
#[derive(Debug, Serialize)]
pub struct TillSessionResponse {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub terminal_id: Option<Uuid>,
    pub staff_id: Uuid,
    pub status: String,
    pub opened_at: DateTime<Utc>,
    pub opening_amount: Decimal,
    pub closed_at: Option<DateTime<Utc>>,
    pub declared_closing_amount: Option<Decimal>,
    pub system_closing_amount: Option<Decimal>,
    pub variance: Option<Decimal>,
    pub cash_counts: Vec<CashCountResponse>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TillSession> for TillSessionResponse {
    fn from(s: TillSession) -> Self {
        Self {
            id: s.id().into_uuid(),
            branch_id: s.branch_id().into_uuid(),
            terminal_id: s.terminal_id().map(|t| t.into_uuid()),
            staff_id: s.staff_id().into_uuid(),
            status: s.status().to_string(),
            opened_at: s.opened_at(),
            opening_amount: s.opening_amount(),
            closed_at: s.closed_at(),
            declared_closing_amount: s.declared_closing_amount(),
            system_closing_amount: s.system_closing_amount(),
            variance: s.variance(),
            cash_counts: s.cash_counts().iter().copied().map(CashCountResponse::from).collect(),
            notes: s.notes().map(String::from),
            created_at: s.created_at(),
            updated_at: s.updated_at(),
        }
    }
}

/// Paginated response for till session listing.
#[derive(Debug, Serialize)]
pub struct TillSessionListResponse {
    pub data: Vec<TillSessionResponse>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}
