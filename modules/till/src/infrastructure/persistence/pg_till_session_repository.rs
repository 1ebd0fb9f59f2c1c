// PgTillSessionRepository - Postgres adapter for TillSession persistence,
// plus the TillOrderLedgerReader aggregate query over `pos_orders`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;
use tenancy::TenantHandle;
use uuid::Uuid;

use crate::domain::entities::{CashCount, TillSession};
use crate::domain::repositories::{TillOrderLedgerReader, TillSessionFilter, TillSessionRepository};
use crate::domain::value_objects::{TillSessionId, TillSessionStatus};
use crate::TillError;
use identity::{ActorId as StaffId, BranchId};
use pos_core::TerminalId;

#[derive(FromRow)]
struct TillSessionRow {
    id: Uuid,
    branch_id: Uuid,
    terminal_id: Option<Uuid>,
    staff_id: Uuid,
    status: String,
    opened_at: DateTime<Utc>,
    opening_amount: Decimal,
    closed_at: Option<DateTime<Utc>>,
    declared_closing_amount: Option<Decimal>,
    system_closing_amount: Option<Decimal>,
    variance: Option<Decimal>,
    cash_counts: Json<Vec<CashCount>>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn row_to_session(row: TillSessionRow) -> Result<TillSession, TillError> {
    let status: TillSessionStatus = row.status.parse().map_err(|_| TillError::InvalidStatus)?;

    Ok(TillSession::reconstitute(
        TillSessionId::from_uuid(row.id),
        BranchId::from_uuid(row.branch_id),
        row.terminal_id.map(TerminalId::from_uuid),
        StaffId::from_uuid(row.staff_id),
        status,
        row.opened_at,
        row.opening_amount,
        row.closed_at,
        row.declared_closing_amount,
        row.system_closing_amount,
        row.variance,
        row.cash_counts.0,
        row.notes,
        row.created_at,
        row.updated_at,
    ))
}

const SELECT_COLUMNS: &str = r#"
    id, branch_id, terminal_id, staff_id, status, opened_at, opening_amount,
    closed_at, declared_closing_amount, system_closing_amount, variance,
    cash_counts, notes, created_at, updated_at
"#;

pub struct PgTillSessionRepository;

impl PgTillSessionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgTillSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TillSessionRepository for PgTillSessionRepository {
    async fn save(&self, tenant: &TenantHandle, session: &TillSession) -> Result<(), TillError> {
        sqlx::query(
            r#"
            INSERT INTO till_sessions (
                id, branch_id, terminal_id, staff_id, status, opened_at, opening_amount,
                closed_at, declared_closing_amount, system_closing_amount, variance,
                cash_counts, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(session.id().into_uuid())
        .bind(session.branch_id().into_uuid())
        .bind(session.terminal_id().map(|t| t.into_uuid()))
        .bind(session.staff_id().into_uuid())
        .bind(session.status().to_string())
        .bind(session.opened_at())
        .bind(session.opening_amount())
        .bind(session.closed_at())
        .bind(session.declared_closing_amount())
        .bind(session.system_closing_amount())
        .bind(session.variance())
        .bind(Json(session.cash_counts().to_vec()))
        .bind(session.notes())
        .bind(session.created_at())
        .bind(session.updated_at())
        .execute(tenant.pool())
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, tenant: &TenantHandle, id: TillSessionId) -> Result<Option<TillSession>, TillError> {
        let row: Option<TillSessionRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM till_sessions WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(row_to_session).transpose()
    }

    async fn find_open_by_terminal(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
    ) -> Result<Option<TillSession>, TillError> {
        let row: Option<TillSessionRow> = match terminal_id {
            Some(terminal_id) => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM till_sessions WHERE branch_id = $1 AND terminal_id = $2 AND status = 'open'"
                ))
                .bind(branch_id.into_uuid())
                .bind(terminal_id.into_uuid())
                .fetch_optional(tenant.pool())
                .await?
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM till_sessions WHERE branch_id = $1 AND terminal_id IS NULL AND status = 'open'"
                ))
                .bind(branch_id.into_uuid())
                .fetch_optional(tenant.pool())
                .await?
            }
        };

        row.map(row_to_session).transpose()
    }

    async fn find_open_by_staff(&self, tenant: &TenantHandle, staff_id: StaffId) -> Result<Option<TillSession>, TillError> {
        let row: Option<TillSessionRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM till_sessions WHERE staff_id = $1 AND status = 'open'"
        ))
        .bind(staff_id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(row_to_session).transpose()
    }

    async fn update(&self, tenant: &TenantHandle, session: &TillSession) -> Result<(), TillError> {
        let result = sqlx::query(
            r#"
            UPDATE till_sessions
            SET status = $2, closed_at = $3, declared_closing_amount = $4,
                system_closing_amount = $5, variance = $6, cash_counts = $7,
                notes = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(session.id().into_uuid())
        .bind(session.status().to_string())
        .bind(session.closed_at())
        .bind(session.declared_closing_amount())
        .bind(session.system_closing_amount())
        .bind(session.variance())
        .bind(Json(session.cash_counts().to_vec()))
        .bind(session.notes())
        .bind(session.updated_at())
        .execute(tenant.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(TillError::TillSessionNotFound(session.id().into_uuid()));
        }

        Ok(())
    }

    async fn find_paginated(
        &self,
        tenant: &TenantHandle,
        filter: TillSessionFilter,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<TillSession>, i64), TillError> {
        let offset = (page - 1) * page_size;

        let mut count_query = String::from("SELECT COUNT(*) FROM till_sessions WHERE 1=1");
        let mut data_query = format!("SELECT {SELECT_COLUMNS} FROM till_sessions WHERE 1=1");
        let mut param_idx = 1;

        if filter.branch_id.is_some() {
            count_query.push_str(&format!(" AND branch_id = ${param_idx}"));
            data_query.push_str(&format!(" AND branch_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.terminal_id.is_some() {
            count_query.push_str(&format!(" AND terminal_id = ${param_idx}"));
            data_query.push_str(&format!(" AND terminal_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.staff_id.is_some() {
            count_query.push_str(&format!(" AND staff_id = ${param_idx}"));
            data_query.push_str(&format!(" AND staff_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.status.is_some() {
            count_query.push_str(&format!(" AND status = ${param_idx}"));
            data_query.push_str(&format!(" AND status = ${param_idx}"));
            param_idx += 1;
        }
        data_query.push_str(&format!(" ORDER BY opened_at DESC LIMIT ${param_idx} OFFSET ${}", param_idx + 1));

        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        let mut data_builder = sqlx::query_as::<_, TillSessionRow>(&data_query);

        if let Some(branch_id) = filter.branch_id {
            count_builder = count_builder.bind(branch_id.into_uuid());
            data_builder = data_builder.bind(branch_id.into_uuid());
        }
        if let Some(terminal_id) = filter.terminal_id {
            count_builder = count_builder.bind(terminal_id.into_uuid());
            data_builder = data_builder.bind(terminal_id.into_uuid());
        }
        if let Some(staff_id) = filter.staff_id {
            count_builder = count_builder.bind(staff_id.into_uuid());
            data_builder = data_builder.bind(staff_id.into_uuid());
        }
        if let Some(status) = filter.status {
            count_builder = count_builder.bind(status.to_string());
            data_builder = data_builder.bind(status.to_string());
        }

        let total = count_builder.fetch_one(tenant.pool()).await?;
        data_builder = data_builder.bind(page_size).bind(offset);
        let rows = data_builder.fetch_all(tenant.pool()).await?;

        let sessions: Result<Vec<TillSession>, TillError> = rows.into_iter().map(row_to_session).collect();
        Ok((sessions?, total))
    }
}

#[async_trait]
impl TillOrderLedgerReader for PgTillSessionRepository {
    /// Sums cash-method `amount_paid` across non-void orders tied to the
    /// session, net of amounts later refunded (spec 4.5).
    async fn net_cash_received(&self, tenant: &TenantHandle, till_session_id: TillSessionId) -> Result<Decimal, TillError> {
        let net: Option<Decimal> = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount_paid), 0)
            FROM pos_orders
            WHERE till_session_id = $1
              AND payment_method = 'cash'
              AND status NOT IN ('void', 'refunded')
            "#,
        )
        .bind(till_session_id.into_uuid())
        .fetch_one(tenant.pool())
        .await?;

        Ok(net.unwrap_or(Decimal::ZERO))
    }
}
