use async_trait::async_trait;
use identity::BranchId;
use tenancy::TenantHandle;

use crate::domain::entities::PosTerminal;
use crate::domain::value_objects::{TerminalCode, TerminalId};
use crate::CoreError;

#[async_trait]
pub trait PosTerminalRepository: Send + Sync {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: TerminalId,
    ) -> Result<Option<PosTerminal>, CoreError>;

    async fn find_by_machine_id(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
        machine_id: &TerminalCode,
    ) -> Result<Option<PosTerminal>, CoreError>;

    async fn list_by_branch(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
    ) -> Result<Vec<PosTerminal>, CoreError>;

    async fn create(&self, tenant: &TenantHandle, terminal: &PosTerminal) -> Result<(), CoreError>;

    async fn save(&self, tenant: &TenantHandle, terminal: &PosTerminal) -> Result<(), CoreError>;
}
