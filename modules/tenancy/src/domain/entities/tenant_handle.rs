//! TenantHandle - a connection pool bound to a single tenant's datastore.
//!
//! Per the core's redesign hint (spec section 9): no process-global "active
//! tenant". Every repository method this workspace's crates expose takes a
//! `&TenantHandle` (or the bare `TenantId` alongside an executor) explicitly,
//! so a single process can serve many tenants concurrently without any
//! shared mutable "current tenant" state.

use sqlx::PgPool;

use crate::domain::value_objects::TenantId;

#[derive(Debug, Clone)]
pub struct TenantHandle {
    tenant_id: TenantId,
    tenant_key: String,
    pool: PgPool,
}

impl TenantHandle {
    pub fn new(tenant_id: TenantId, tenant_key: String, pool: PgPool) -> Self {
        Self {
            tenant_id,
            tenant_key,
            pool,
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn tenant_key(&self) -> &str {
        &self.tenant_key
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
