//! TillSession repository trait

use async_trait::async_trait;
use tenancy::TenantHandle;

use crate::domain::entities::TillSession;
use crate::domain::value_objects::{TillSessionId, TillSessionStatus};
use crate::TillError;
use identity::{ActorId as StaffId, BranchId};
use pos_core::TerminalId;

/// Filter for querying till sessions (ambient admin/reporting query, not
/// named by spec 4.5/4.6 but needed to make the lifecycle inspectable).
#[derive(Debug, Clone, Default)]
pub struct TillSessionFilter {
    pub branch_id: Option<BranchId>,
    pub terminal_id: Option<TerminalId>,
    pub staff_id: Option<StaffId>,
    pub status: Option<TillSessionStatus>,
}

/// Repository trait for TillSession persistence.
#[async_trait]
pub trait TillSessionRepository: Send + Sync {
    /// Saves a newly-opened session.
    async fn save(&self, tenant: &TenantHandle, session: &TillSession) -> Result<(), TillError>;

    /// Finds a session by ID.
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: TillSessionId,
    ) -> Result<Option<TillSession>, TillError>;

    /// Finds the currently open session for `(branch_id, terminal_id)`, the
    /// invariant spec 3 and 4.5 key on. `terminal_id = None` matches
    /// sessions opened without a terminal (spec 4.6 step 5's cashier-scoped
    /// fallback).
    async fn find_open_by_terminal(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
    ) -> Result<Option<TillSession>, TillError>;

    /// Finds the currently open session for a staff member, irrespective of
    /// terminal (spec 4.6 step 5's final fallback when no terminal was
    /// resolved).
    async fn find_open_by_staff(
        &self,
        tenant: &TenantHandle,
        staff_id: StaffId,
    ) -> Result<Option<TillSession>, TillError>;

    /// Updates an existing session (principally: closing it).
    async fn update(&self, tenant: &TenantHandle, session: &TillSession) -> Result<(), TillError>;

    /// Lists sessions with pagination, for reporting/admin surfaces.
    async fn find_paginated(
        &self,
        tenant: &TenantHandle,
        filter: TillSessionFilter,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<TillSession>, i64), TillError>;
}

/// Port onto the order ledger that the till-session close computation
/// needs (spec 4.5: "systemClosingAmount by summing cash-method
/// amountPaid over all orders tied to this session ... subtracting
/// refunds"). Deliberately narrow and read-only so this crate need not
/// depend on `catalog`'s `Order` type; the Postgres adapter satisfies it
/// with a single aggregate query against `pos_orders`.
#[async_trait]
pub trait TillOrderLedgerReader: Send + Sync {
    /// Sum of `amount_paid` for cash-method, non-void orders tied to this
    /// session, minus the sum of `amount_paid` for orders later refunded.
    async fn net_cash_received(
        &self,
        tenant: &TenantHandle,
        till_session_id: TillSessionId,
    ) -> Result<rust_decimal::Decimal, TillError>;
}
