//! # Till Module
//!
//! The till-session lifecycle (spec 3 `TillSession`, spec 4.5): a cashier
//! opens a cash drawer against a `(branch, terminal)` pair, places orders
//! against it through the catalog module's order-commit path, and closes it
//! by declaring a cash count that is reconciled against the system total.
//!
//! ## Architecture
//!
//! Clean Architecture, same split as the other core crates:
//!
//! - **Domain**: `TillSession`, its value objects, and the repository ports
//!   (`TillSessionRepository` for persistence, `TillOrderLedgerReader` for
//!   the close-time aggregate over `pos_orders`).
//! - **Application**: the four lifecycle use cases (open, close, get
//!   current, list) and their command/response DTOs.
//! - **Infrastructure**: the PostgreSQL adapter.
//!
//! ## Lifecycle
//!
//! ```text
//! open -> closed
//! ```
//!
//! At most one `open` session may exist per `(branch_id, terminal_id)` at
//! any instant; this is the invariant the order-commit path (in `catalog`)
//! depends on to resolve `tillSessionId` (spec 4.6 step 5).

pub mod application;
pub mod domain;
pub mod infrastructure;

mod error;

pub use error::{ErrorKind, TillError};

pub use domain::entities::{CashCount, TillSession};
pub use domain::repositories::{TillOrderLedgerReader, TillSessionFilter, TillSessionRepository};
pub use domain::value_objects::{TillSessionId, TillSessionStatus};

pub use application::dtos::{
    CashCountInput, CashCountResponse, CloseTillCommand, ListTillSessionsQuery, OpenTillCommand,
    TillSessionListResponse, TillSessionResponse,
};
pub use application::use_cases::{CloseTillUseCase, GetCurrentTillUseCase, ListTillSessionsUseCase, OpenTillUseCase};

pub use infrastructure::persistence::PgTillSessionRepository;
