use async_trait::async_trait;
use identity::BranchId;
use tenancy::TenantHandle;

use crate::domain::entities::Branch;
use crate::domain::value_objects::BranchCode;
use crate::CoreError;

#[async_trait]
pub trait BranchRepository: Send + Sync {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: BranchId,
    ) -> Result<Option<Branch>, CoreError>;

    async fn find_by_code(
        &self,
        tenant: &TenantHandle,
        code: &BranchCode,
    ) -> Result<Option<Branch>, CoreError>;

    async fn list(&self, tenant: &TenantHandle) -> Result<Vec<Branch>, CoreError>;

    async fn create(&self, tenant: &TenantHandle, branch: &Branch) -> Result<(), CoreError>;

    async fn save(&self, tenant: &TenantHandle, branch: &Branch) -> Result<(), CoreError>;
}
