//! TillSession entity - a cashier's open cash drawer for a branch/terminal
//! interval (spec 3, spec 4.5).
//!
//! Invariants:
//! - At most one `open` session per `(branch_id, terminal_id)` at any
//!   instant (enforced by the repository's open-session lookup plus a
//!   partial unique index at the storage layer, not re-validated here).
//! - `opening_amount` must be non-negative.
//! - Closing requires a `declared_closing_amount`; the system-computed
//!   closing amount and the resulting variance are supplied by the use
//!   case (spec 4.5: summed from the order ledger, which this entity has
//!   no access to) and merely recorded here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use identity::BranchId;
use pos_core::TerminalId;

use crate::domain::value_objects::{TillSessionId, TillSessionStatus};
use crate::TillError;
use identity::ActorId as StaffId;

/// One cash-denomination count entered by the cashier at open or close,
/// e.g. `{ denomination: 100.00, count: 4 }`. Free-form per spec 3
/// (`cashCounts`); the core does not interpret it beyond storing it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CashCount {
    pub denomination: Decimal,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillSession {
    id: TillSessionId,
    branch_id: BranchId,
    terminal_id: Option<TerminalId>,
    staff_id: StaffId,
    status: TillSessionStatus,
    opened_at: DateTime<Utc>,
    opening_amount: Decimal,
    closed_at: Option<DateTime<Utc>>,
    declared_closing_amount: Option<Decimal>,
    system_closing_amount: Option<Decimal>,
    variance: Option<Decimal>,
    cash_counts: Vec<CashCount>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TillSession {
    /// Opens a new session. Preconditions from spec 4.5 (staff active,
    /// branch scope, no existing open session, terminal active) are
    /// caller responsibilities (`OpenTillUseCase`); this constructor only
    /// enforces `opening_amount >= 0`.
    pub fn open(
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
        staff_id: StaffId,
        opening_amount: Decimal,
        cash_counts: Vec<CashCount>,
        notes: Option<String>,
    ) -> Result<Self, TillError> {
        if opening_amount < Decimal::ZERO {
            return Err(TillError::InvalidOpeningAmount);
        }
        let now = Utc::now();
        Ok(Self {
            id: TillSessionId::new(),
            branch_id,
            terminal_id,
            staff_id,
            status: TillSessionStatus::Open,
            opened_at: now,
            opening_amount,
            closed_at: None,
            declared_closing_amount: None,
            system_closing_amount: None,
            variance: None,
            cash_counts,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TillSessionId,
        branch_id: BranchId,
        terminal_id: Option<TerminalId>,
        staff_id: StaffId,
        status: TillSessionStatus,
        opened_at: DateTime<Utc>,
        opening_amount: Decimal,
        closed_at: Option<DateTime<Utc>>,
        declared_closing_amount: Option<Decimal>,
        system_closing_amount: Option<Decimal>,
        variance: Option<Decimal>,
        cash_counts: Vec<CashCount>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            branch_id,
            terminal_id,
            staff_id,
            status,
            opened_at,
            opening_amount,
            closed_at,
            declared_closing_amount,
            system_closing_amount,
            variance,
            cash_counts,
            notes,
            created_at,
            updated_at,
        }
    }

    /// Seals the session given a system-computed closing amount (spec 4.5:
    /// `opening_amount + cash amountPaid across this session's orders -
    /// refunds`), recording `variance = declared - system`.
    pub fn close(
        &mut self,
        declared_closing_amount: Decimal,
        system_closing_amount: Decimal,
        cash_counts: Vec<CashCount>,
        notes: Option<String>,
    ) -> Result<(), TillError> {
        if !self.status.can_close() {
            return Err(TillError::TillClosed);
        }
        self.status = TillSessionStatus::Closed;
        self.closed_at = Some(Utc::now());
        self.declared_closing_amount = Some(declared_closing_amount);
        self.system_closing_amount = Some(system_closing_amount);
        self.variance = Some(declared_closing_amount - system_closing_amount);
        if !cash_counts.is_empty() {
            self.cash_counts = cash_counts;
        }
        self.notes = notes.or_else(|| self.notes.clone());
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn validate_open(&self) -> Result<(), TillError> {
        if !self.status.is_open() {
            return Err(TillError::TillClosed);
        }
        Ok(())
    }

    pub fn id(&self) -> TillSessionId {
        self.id
    }

    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    pub fn terminal_id(&self) -> Option<TerminalId> {
        self.terminal_id
    }

    pub fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    pub fn status(&self) -> TillSessionStatus {
        self.status
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn opening_amount(&self) -> Decimal {
        self.opening_amount
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    pub fn declared_closing_amount(&self) -> Option<Decimal> {
        self.declared_closing_amount
    }

    pub fn system_closing_amount(&self) -> Option<Decimal> {
        self.system_closing_amount
    }

    pub fn variance(&self) -> Option<Decimal> {
        self.variance
    }

    pub fn cash_counts(&self) -> &[CashCount] {
        &self.cash_counts
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open_session() -> TillSession {
        TillSession::open(BranchId::new(), Some(TerminalId::new()), StaffId::new(), dec!(200.00), vec![], None).unwrap()
    }

    #[test]
    fn opens_with_non_negative_amount() {
        let session = open_session();
        assert!(session.status().is_open());
        assert_eq!(session.opening_amount(), dec!(200.00));
    }

    #[test]
    fn rejects_negative_opening_amount() {
        let result = TillSession::open(BranchId::new(), None, StaffId::new(), dec!(-1.00), vec![], None);
        assert!(matches!(result, Err(TillError::InvalidOpeningAmount)));
    }

    #[test]
    fn close_computes_variance_from_system_amount() {
        let mut session = open_session();
        // opening 200.00 + cash sales 450.00 = system 650.00 (scenario 6)
        session.close(dec!(640.00), dec!(650.00), vec![], None).unwrap();

        assert!(session.status().is_closed());
        assert_eq!(session.system_closing_amount(), Some(dec!(650.00)));
        assert_eq!(session.variance(), Some(dec!(-10.00)));
    }

    #[test]
    fn cannot_close_twice() {
        let mut session = open_session();
        session.close(dec!(200.00), dec!(200.00), vec![], None).unwrap();
        let result = session.close(dec!(200.00), dec!(200.00), vec![], None);
        assert!(matches!(result, Err(TillError::TillClosed)));
    }
}
