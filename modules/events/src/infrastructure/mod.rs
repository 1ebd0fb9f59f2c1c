// Infrastructure layer for the events module - an in-process publisher.
// A message-queue-backed sink is the concrete choice of whatever platform
// embeds this core; out of core scope (spec 1).

mod tracing_event_publisher;

pub use tracing_event_publisher::TracingEventPublisher;
