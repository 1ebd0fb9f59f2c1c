//! Get current till session use case.

use std::sync::Arc;
use uuid::Uuid;

use tenancy::TenantHandle;

use crate::application::dtos::TillSessionResponse;
use crate::domain::repositories::TillSessionRepository;
use crate::TillError;
use identity::BranchId;
use pos_core::TerminalId;

/// Looks up the currently open till session for a branch/terminal scope
/// (spec 4.6 step 5's lookup path).
pub struct GetCurrentTillUseCase {
    till_repo: Arc<dyn TillSessionRepository>,
}

impl GetCurrentTillUseCase {
    pub fn new(till_repo: Arc<dyn TillSessionRepository>) -> Self {
        Self { till_repo }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        branch_id: Uuid,
        terminal_id: Option<Uuid>,
    ) -> Result<TillSessionResponse, TillError> {
        let branch_id = BranchId::from_uuid(branch_id);
        let terminal_id = terminal_id.map(TerminalId::from_uuid);

        let session = self
            .till_repo
            .find_open_by_terminal(tenant, branch_id, terminal_id)
            .await?
            .ok_or(TillError::NoOpenTill)?;

        Ok(TillSessionResponse::from(session))
    }
}
