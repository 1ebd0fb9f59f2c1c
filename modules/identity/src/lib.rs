// Identity module - the resolved principal behind a request, PIN-based
// staff login, and the authorization surface the core consumes.
//
// Authentication/JWT *issuance* in general, RBAC implementation, and staff
// account management are out of core scope (spec 1); this crate only
// carries what spec 4.5, 4.6 step 1-3, and 4.8 need: ActorContext
// resolution, the PIN-login variant, and the `Authorizer` contract.
//
// Clean Architecture layers:
// - domain: entities, value objects, repository ports, auth primitives
// - application: use cases composing the ports
// - infrastructure: PostgreSQL adapters

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

mod error;

pub use config::IdentityConfig;
pub use error::{ErrorKind, IdentityError};

pub use application::use_cases::{PinLoginCommand, PinLoginOutcome, PinLoginUseCase};
pub use domain::auth::{pin_hasher, JwtTillTokenIssuer, TillTokenClaims, TillTokenIssuer};
pub use domain::entities::{validate_pin_format, ActorContext, ActorStatus, PinCredential, PinCredentialId};
pub use domain::repositories::{ActorRepository, PinCredentialRepository};
pub use domain::services::{Action, AllowAllAuthorizer, Authorizer, Scope};
pub use domain::value_objects::{ActorId, ActorId as UserId, BranchId};
pub use infrastructure::persistence::{PgActorRepository, PgPinCredentialRepository};
