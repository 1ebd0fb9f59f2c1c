// PostgreSQL OrderRepository implementation (spec 4.6c).
//
// A committed order's lines/totals/payment/pricing snapshot are stored as
// JSONB columns: they are write-once, read-whole snapshots (spec 3), never
// queried field-by-field, so there is nothing a relational decomposition
// would buy over `Json<T>`.

use async_trait::async_trait;
use identity::{ActorId, BranchId};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use std::str::FromStr;
use tenancy::TenantId;
use pos_core::TerminalId;
use uuid::Uuid;

use crate::domain::entities::{Order, OrderLine, OrderPayment, OrderTotals, PricingSnapshot};
use crate::domain::repositories::OrderRepository;
use crate::domain::value_objects::OrderId;
use crate::domain::value_objects::OrderStatus;
use crate::CatalogError;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    tenant_id: Uuid,
    order_number: String,
    branch_id: Uuid,
    terminal_id: Option<Uuid>,
    till_session_id: Uuid,
    staff_id: Uuid,
    status: String,
    lines: Json<Vec<OrderLine>>,
    totals: Json<OrderTotals>,
    payment: Json<OrderPayment>,
    pricing_snapshot: Json<PricingSnapshot>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_entity(row: OrderRow) -> Result<Order, CatalogError> {
    Ok(Order::reconstitute(
        OrderId::from_uuid(row.id),
        TenantId::from_uuid(row.tenant_id),
        row.order_number,
        BranchId::from_uuid(row.branch_id),
        row.terminal_id.map(TerminalId::from_uuid),
        till::TillSessionId::from_uuid(row.till_session_id),
        ActorId::from_uuid(row.staff_id),
        OrderStatus::from_str(&row.status)?,
        row.lines.0,
        row.totals.0,
        row.payment.0,
        row.pricing_snapshot.0,
        row.customer_name,
        row.customer_phone,
        row.notes,
        row.created_at,
        row.updated_at,
    ))
}

const SELECT: &str = "SELECT id, tenant_id, order_number, branch_id, terminal_id, till_session_id, staff_id, \
                       status, lines, totals, payment, pricing_snapshot, customer_name, customer_phone, notes, \
                       created_at, updated_at FROM pos_orders";

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn insert(&self, conn: &mut PgConnection, order: &Order) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO pos_orders
                (id, tenant_id, order_number, branch_id, terminal_id, till_session_id, staff_id, status,
                 lines, totals, payment, pricing_snapshot, customer_name, customer_phone, notes,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(order.id().into_uuid())
        .bind(order.tenant_id().into_uuid())
        .bind(order.order_number())
        .bind(order.branch_id().into_uuid())
        .bind(order.terminal_id().map(|t| t.into_uuid()))
        .bind(order.till_session_id().into_uuid())
        .bind(order.staff_id().into_uuid())
        .bind(order.status().to_string())
        .bind(Json(order.lines().to_vec()))
        .bind(Json(order.totals()))
        .bind(Json(order.payment().clone()))
        .bind(Json(order.pricing_snapshot().clone()))
        .bind(order.customer_name())
        .bind(order.customer_phone())
        .bind(order.notes())
        .bind(order.created_at())
        .bind(order.updated_at())
        .execute(conn)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, tenant_id: TenantId, id: OrderId) -> Result<Option<Order>, CatalogError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{SELECT} WHERE tenant_id = $1 AND id = $2"))
            .bind(tenant_id.into_uuid())
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_entity).transpose()
    }

    async fn find_by_order_number(&self, tenant_id: TenantId, order_number: &str) -> Result<Option<Order>, CatalogError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{SELECT} WHERE tenant_id = $1 AND order_number = $2"))
            .bind(tenant_id.into_uuid())
            .bind(order_number)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_entity).transpose()
    }

    async fn update(&self, order: &Order) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            UPDATE pos_orders SET
                status = $1,
                payment = $2,
                updated_at = $3
            WHERE tenant_id = $4 AND id = $5
            "#,
        )
        .bind(order.status().to_string())
        .bind(Json(order.payment().clone()))
        .bind(order.updated_at())
        .bind(order.tenant_id().into_uuid())
        .bind(order.id().into_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
