// OrderRepository port - persists a committed Order (spec 4.6c).
//
// `insert` takes a live `PgConnection` so it participates in the same
// datastore transaction the order-commit use case opened for order-number
// allocation and inventory deduction (spec 4.6: "inside a single datastore
// transaction"). Reads use the repository's own pool.

use async_trait::async_trait;
use sqlx::PgConnection;
use tenancy::TenantId;

use crate::domain::entities::Order;
use crate::domain::value_objects::OrderId;
use crate::CatalogError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, conn: &mut PgConnection, order: &Order) -> Result<(), CatalogError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: OrderId) -> Result<Option<Order>, CatalogError>;

    async fn find_by_order_number(&self, tenant_id: TenantId, order_number: &str) -> Result<Option<Order>, CatalogError>;

    /// Replaces a persisted order wholesale, used by the explicit void/refund
    /// transitions (spec 3). The commit path never calls this.
    async fn update(&self, order: &Order) -> Result<(), CatalogError>;
}
