// Core module - branches, POS terminals, and order-number allocation.
//
// Clean Architecture layers:
// - domain: entities, value objects, repository ports
// - infrastructure: PostgreSQL adapters
//
// Admin CRUD over branches/terminals is out of scope (spec Non-goals); this
// crate only carries the data model and allocation primitive the order-commit
// transaction in the catalog module depends on.

pub mod domain;
pub mod infrastructure;

mod error;

pub use error::{CoreError, ErrorKind};

pub use domain::entities::{Branch, PaymentMethodConfig, PosConfig, PosTerminal, TaxMode, TaxSettings, TerminalStatus};
pub use domain::repositories::{BranchRepository, OrderNumberGenerator, PosTerminalRepository};
pub use domain::value_objects::{BranchCode, TerminalCode, TerminalId};

pub use infrastructure::persistence::{PgBranchRepository, PgOrderNumberGenerator, PgPosTerminalRepository};
