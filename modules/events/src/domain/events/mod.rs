// Event payloads emitted by the core's postflight step (spec 4.6)

mod order_committed;

pub use order_committed::OrderCommitted;

/// Closed set of events the core emits. New variants are additive; nothing
/// in the commit path depends on the set being exhaustively matched by
/// downstream consumers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    OrderCommitted(OrderCommitted),
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::OrderCommitted(_) => "order.committed",
        }
    }
}
