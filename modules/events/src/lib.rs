// Events module - the postflight notification surface for the order-commit
// transaction (spec 4.6).
//
// Receipt rendering, loyalty integration, and any other downstream consumer
// are out of core scope; this crate only carries the `order.committed`
// event shape and the `EventPublisher` port the commit use case calls
// best-effort, after its own transaction has already committed.
//
// Clean Architecture layers:
// - domain: the event payloads and the publisher port
// - infrastructure: an in-process publisher that logs via `tracing`

pub mod domain;
pub mod infrastructure;

mod error;

pub use error::{ErrorKind, EventError};

pub use domain::events::{DomainEvent, OrderCommitted};
pub use domain::services::EventPublisher;

pub use infrastructure::TracingEventPublisher;
