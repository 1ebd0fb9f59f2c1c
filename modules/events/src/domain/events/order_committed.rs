// OrderCommitted - emitted once an order-commit transaction has committed
// (spec 4.6 postflight). Consumers: receipt rendering, loyalty integration
// (both out of core scope); this crate only carries the payload shape.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCommitted {
    pub tenant_id: Uuid,
    pub branch_id: Uuid,
    pub order_id: Uuid,
    pub order_number: String,
    pub till_session_id: Option<Uuid>,
    pub status: String,
    pub grand_total: Decimal,
    pub currency: String,
    pub committed_at: DateTime<Utc>,
}
