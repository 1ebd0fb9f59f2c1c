//! Open till session use case (spec 4.5).

use std::sync::Arc;

use tenancy::{TenantHandle, TenantId};

use crate::application::dtos::{CashCountInput, OpenTillCommand, TillSessionResponse};
use crate::domain::entities::{CashCount, TillSession};
use crate::domain::repositories::TillSessionRepository;
use crate::TillError;
use identity::{ActorId, BranchId, TillTokenIssuer};
use pos_core::{PosTerminalRepository, TerminalId};

/// Opens a new till session for a staff member, optionally scoped to a
/// specific POS terminal, and mints a token embedding the new
/// `till_session_id` (spec 4.5 step 3).
pub struct OpenTillUseCase {
    till_repo: Arc<dyn TillSessionRepository>,
    terminal_repo: Arc<dyn PosTerminalRepository>,
    token_issuer: Arc<dyn TillTokenIssuer>,
}

impl OpenTillUseCase {
    pub fn new(
        till_repo: Arc<dyn TillSessionRepository>,
        terminal_repo: Arc<dyn PosTerminalRepository>,
        token_issuer: Arc<dyn TillTokenIssuer>,
    ) -> Self {
        Self {
            till_repo,
            terminal_repo,
            token_issuer,
        }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        tenant_id: TenantId,
        cmd: OpenTillCommand,
        staff_id: ActorId,
    ) -> Result<(TillSessionResponse, String), TillError> {
        let branch_id = BranchId::from_uuid(cmd.branch_id);
        let terminal_id = cmd.terminal_id.map(TerminalId::from_uuid);

        if let Some(terminal_id) = terminal_id {
            let terminal = self
                .terminal_repo
                .find_by_id(tenant, terminal_id)
                .await
                .map_err(|_| TillError::InvalidStatus)?
                .ok_or(TillError::InvalidStatus)?;
            if !terminal.status().is_active() {
                return Err(TillError::InvalidStatus);
            }
        }

        if let Some(existing) = self
            .till_repo
            .find_open_by_terminal(tenant, branch_id, terminal_id)
            .await?
        {
            return Err(if existing.staff_id() == staff_id {
                TillError::TillAlreadyOpenBySelf
            } else {
                TillError::TillAlreadyOpenByOther
            });
        }

        let cash_counts: Vec<CashCount> = cmd
            .cash_counts
            .iter()
            .map(|c: &CashCountInput| CashCount {
                denomination: c.denomination,
                count: c.count,
            })
            .collect();

        let session = TillSession::open(branch_id, terminal_id, staff_id, cmd.opening_amount, cash_counts, cmd.notes)?;

        self.till_repo.save(tenant, &session).await?;

        let token = self
            .token_issuer
            .issue(staff_id, tenant_id, Some(session.id().into_uuid()))
            .map_err(|_| TillError::InvalidStatus)?;

        Ok((TillSessionResponse::from(session), token))
    }
}
