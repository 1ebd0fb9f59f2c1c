// PostgreSQL IdempotencyRecordRepository implementation (spec 4.6 "Idempotency").

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tenancy::TenantId;
use uuid::Uuid;

use crate::domain::repositories::IdempotencyRecordRepository;
use crate::domain::value_objects::OrderId;
use crate::CatalogError;

pub struct PgIdempotencyRecordRepository {
    pool: PgPool,
}

impl PgIdempotencyRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdempotencyRecordRepository for PgIdempotencyRecordRepository {
    async fn find_order_id(&self, tenant_id: TenantId, client_op_id: &str) -> Result<Option<OrderId>, CatalogError> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            "SELECT order_id FROM order_idempotency_keys WHERE tenant_id = $1 AND client_op_id = $2",
        )
        .bind(tenant_id.into_uuid())
        .bind(client_op_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(order_id,)| OrderId::from_uuid(order_id)))
    }

    async fn record(
        &self,
        conn: &mut PgConnection,
        tenant_id: TenantId,
        client_op_id: &str,
        order_id: OrderId,
    ) -> Result<(), CatalogError> {
        sqlx::query(
            "INSERT INTO order_idempotency_keys (tenant_id, client_op_id, order_id) VALUES ($1, $2, $3)",
        )
        .bind(tenant_id.into_uuid())
        .bind(client_op_id)
        .bind(order_id.into_uuid())
        .execute(conn)
        .await?;

        Ok(())
    }
}
