// EventPublisher port - the core's only outbound notification surface.
// Postflight emission is best-effort: the order-commit use case logs a
// publish failure and returns its already-committed result regardless
// (spec 4.6, 7).

use async_trait::async_trait;

use crate::domain::events::DomainEvent;
use crate::EventError;

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: DomainEvent) -> Result<(), EventError>;
}
