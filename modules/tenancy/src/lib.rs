// Tenancy module - tenant key resolution and per-tenant datastore handles
//
// Clean Architecture layers:
// - domain: TenantId, TenantHandle, the TenantRegistry port
// - infrastructure: the Postgres-backed adapter

pub mod config;
pub mod domain;
pub mod infrastructure;

mod error;

pub use config::TenancyConfig;
pub use domain::entities::TenantHandle;
pub use domain::repositories::TenantRegistry;
pub use domain::value_objects::TenantId;
pub use error::{ErrorKind, TenancyError};
pub use infrastructure::persistence::PgTenantRegistry;
