// TenantRegistry port - resolves an opaque tenant key to a bound datastore handle.
//
// Consulting the tenant key -> tenant id mapping at the authentication
// boundary is out of core scope (spec 4.7); this port only does the
// resolution the core itself needs: tenant key -> TenantHandle.

use async_trait::async_trait;

use crate::domain::entities::TenantHandle;
use crate::error::TenancyError;

#[async_trait]
pub trait TenantRegistry: Send + Sync {
    /// Resolves a tenant key (e.g. the subdomain or org slug carried on the
    /// request) to a handle bound to that tenant's isolated datastore.
    async fn resolve(&self, tenant_key: &str) -> Result<TenantHandle, TenancyError>;
}
