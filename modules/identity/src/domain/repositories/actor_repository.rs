// ActorRepository port - resolves the principal behind an authenticated
// request (spec 4.6 preflight step 1). Account creation/management is out
// of core scope; this port only reads.

use async_trait::async_trait;
use tenancy::TenantHandle;

use crate::domain::entities::ActorContext;
use crate::domain::value_objects::ActorId;
use crate::IdentityError;

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: ActorId,
    ) -> Result<Option<ActorContext>, IdentityError>;
}
