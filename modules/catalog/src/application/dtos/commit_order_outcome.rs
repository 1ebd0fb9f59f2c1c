// CommitOrderOutcome - the order-commit transaction's result.

use crate::domain::entities::OrderTotals;
use crate::domain::value_objects::{OrderId, OrderStatus};

#[derive(Debug, Clone)]
pub struct CommitOrderOutcome {
    pub order_id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub totals: OrderTotals,
    /// `true` when this outcome was served from a prior commit recorded
    /// under the same `clientOpId`, rather than freshly committed.
    pub idempotent_replay: bool,
}
