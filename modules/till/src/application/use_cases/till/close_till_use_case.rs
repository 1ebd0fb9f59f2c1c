//! Close till session use case (spec 4.5).

use std::sync::Arc;

use tenancy::{TenantHandle, TenantId};
use uuid::Uuid;

use crate::application::dtos::{CashCountInput, CloseTillCommand, TillSessionResponse};
use crate::domain::entities::CashCount;
use crate::domain::repositories::{TillOrderLedgerReader, TillSessionRepository};
use crate::domain::value_objects::TillSessionId;
use crate::TillError;
use identity::{ActorId, TillTokenIssuer};

/// Closes an open till session, computing `systemClosingAmount` from the
/// order ledger and recording the variance against the cashier's declared
/// amount (spec 4.5 step 4).
pub struct CloseTillUseCase {
    till_repo: Arc<dyn TillSessionRepository>,
    ledger_reader: Arc<dyn TillOrderLedgerReader>,
    token_issuer: Arc<dyn TillTokenIssuer>,
}

impl CloseTillUseCase {
    pub fn new(
        till_repo: Arc<dyn TillSessionRepository>,
        ledger_reader: Arc<dyn TillOrderLedgerReader>,
        token_issuer: Arc<dyn TillTokenIssuer>,
    ) -> Self {
        Self {
            till_repo,
            ledger_reader,
            token_issuer,
        }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        tenant_id: TenantId,
        cmd: CloseTillCommand,
        staff_id: ActorId,
    ) -> Result<(TillSessionResponse, String), TillError> {
        let till_session_id = TillSessionId::from_uuid(cmd.till_session_id);

        let mut session = self
            .till_repo
            .find_by_id(tenant, till_session_id)
            .await?
            .ok_or(TillError::TillSessionNotFound(cmd.till_session_id))?;

        if session.staff_id() != staff_id {
            return Err(TillError::TillBelongsToOther);
        }

        let net_cash = self.ledger_reader.net_cash_received(tenant, till_session_id).await?;
        let system_closing_amount = session.opening_amount() + net_cash;

        let cash_counts: Vec<CashCount> = cmd
            .cash_counts
            .iter()
            .map(|c: &CashCountInput| CashCount {
                denomination: c.denomination,
                count: c.count,
            })
            .collect();

        session.close(cmd.declared_closing_amount, system_closing_amount, cash_counts, cmd.notes)?;

        self.till_repo.update(tenant, &session).await?;

        let token = self
            .token_issuer
            .issue(staff_id, tenant_id, None::<Uuid>)
            .map_err(|_| TillError::InvalidStatus)?;

        Ok((TillSessionResponse::from(session), token))
    }
}
