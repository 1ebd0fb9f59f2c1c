// Identity module errors

use thiserror::Error;
use uuid::Uuid;

/// The disposition category a caller-facing translation layer should map an
/// error to. The core never picks an HTTP status itself; this is the hook
/// the (external) transport boundary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    NotFound,
    Conflict,
    RateLimited,
    Internal,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("actor not found: {0}")]
    ActorNotFound(Uuid),

    #[error("actor account is suspended: {0}")]
    AccountSuspended(Uuid),

    #[error("actor is not a staff member: {0}")]
    NotStaff(Uuid),

    #[error("actor {actor} is not authorized for branch {branch}")]
    BranchNotAuthorized { actor: Uuid, branch: Uuid },

    #[error("PIN must be 4 to 8 digits")]
    InvalidPinFormat,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("PIN locked for {remaining_minutes} more minute(s)")]
    PinLocked { remaining_minutes: i64 },

    #[error("PIN already in use")]
    DuplicatePin,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("token error: {0}")]
    Token(String),
}

impl IdentityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::ActorNotFound(_) => ErrorKind::NotFound,
            IdentityError::AccountSuspended(_) => ErrorKind::Authorization,
            IdentityError::NotStaff(_) => ErrorKind::Authorization,
            IdentityError::BranchNotAuthorized { .. } => ErrorKind::Authorization,
            IdentityError::InvalidPinFormat => ErrorKind::Validation,
            IdentityError::InvalidCredentials => ErrorKind::Authorization,
            IdentityError::PinLocked { .. } => ErrorKind::RateLimited,
            IdentityError::DuplicatePin => ErrorKind::Conflict,
            IdentityError::Database(_) => ErrorKind::Internal,
            IdentityError::Token(_) => ErrorKind::Internal,
        }
    }
}
