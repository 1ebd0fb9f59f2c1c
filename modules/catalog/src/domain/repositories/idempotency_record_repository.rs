// IdempotencyRecordRepository port - the clientOpId -> orderId mapping
// (spec 4.6 "Idempotency"). A lookup happens before the commit transaction
// opens; a record is written inside it, alongside the order insert, so a
// crash between the two never leaves a dangling key pointing nowhere.

use async_trait::async_trait;
use sqlx::PgConnection;
use tenancy::TenantId;

use crate::domain::value_objects::OrderId;
use crate::CatalogError;

#[async_trait]
pub trait IdempotencyRecordRepository: Send + Sync {
    async fn find_order_id(&self, tenant_id: TenantId, client_op_id: &str) -> Result<Option<OrderId>, CatalogError>;

    async fn record(
        &self,
        conn: &mut PgConnection,
        tenant_id: TenantId,
        client_op_id: &str,
        order_id: OrderId,
    ) -> Result<(), CatalogError>;
}
