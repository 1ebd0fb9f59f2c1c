// TracingEventPublisher - logs each event as a structured `tracing` record.
//
// This is the in-process sink this workspace ships; wiring a real broker
// (SQS, Kafka, a webhook dispatcher) is a platform concern, out of core
// scope (spec 1). Swapping it for one only requires a new `EventPublisher`
// impl - nothing in the commit path changes.

use async_trait::async_trait;

use crate::domain::events::DomainEvent;
use crate::domain::services::EventPublisher;
use crate::EventError;

#[derive(Debug, Default)]
pub struct TracingEventPublisher;

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), EventError> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(event = event.name(), payload = %payload, "domain event published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::OrderCommitted;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::{NoContext, Timestamp, Uuid};

    #[tokio::test]
    async fn publish_never_fails_for_a_well_formed_event() {
        let publisher = TracingEventPublisher;
        let event = DomainEvent::OrderCommitted(OrderCommitted {
            tenant_id: Uuid::new_v7(Timestamp::now(NoContext)),
            branch_id: Uuid::new_v7(Timestamp::now(NoContext)),
            order_id: Uuid::new_v7(Timestamp::now(NoContext)),
            order_number: "DT-20260101-0001".into(),
            till_session_id: Some(Uuid::new_v7(Timestamp::now(NoContext))),
            status: "paid".into(),
            grand_total: dec!(19.55),
            currency: "SAR".into(),
            committed_at: Utc::now(),
        });

        assert!(publisher.publish(event).await.is_ok());
    }
}
