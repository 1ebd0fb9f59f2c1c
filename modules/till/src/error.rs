//! Till module error types (spec 4.5, 7).

use thiserror::Error;
use uuid::Uuid;

/// The disposition category a caller-facing translation layer maps an
/// error to (see the other modules' `ErrorKind`s for the same convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

#[derive(Debug, Error)]
pub enum TillError {
    /// Opening balance must be non-negative.
    #[error("opening amount must be non-negative")]
    InvalidOpeningAmount,

    /// The requested till session was not found.
    #[error("till session not found: {0}")]
    TillSessionNotFound(Uuid),

    /// `(branchId, posTerminalId)` already has an open session, opened by
    /// the same cashier attempting to re-open it.
    #[error("you already have an open till session on this terminal")]
    TillAlreadyOpenBySelf,

    /// `(branchId, posTerminalId)` already has an open session, opened by
    /// a different cashier (spec 4.5: "distinguish same cashier vs other
    /// cashier in the message").
    #[error("another cashier already has an open till session on this terminal")]
    TillAlreadyOpenByOther,

    /// No open session exists for the requested scope (spec 4.6 step 5).
    #[error("no open till session for this branch/terminal")]
    NoOpenTill,

    /// The session is already closed; further commits/closes are rejected.
    #[error("till session is closed")]
    TillClosed,

    /// Attempted to close a session the actor does not own.
    #[error("till session belongs to another cashier")]
    TillBelongsToOther,

    /// The status string read back from storage does not match a known
    /// `TillSessionStatus` variant.
    #[error("invalid till session status")]
    InvalidStatus,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TillError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TillError::TillSessionNotFound(_) => ErrorKind::NotFound,

            TillError::TillAlreadyOpenBySelf
            | TillError::TillAlreadyOpenByOther
            | TillError::NoOpenTill
            | TillError::TillClosed
            | TillError::TillBelongsToOther => ErrorKind::Conflict,

            TillError::InvalidOpeningAmount | TillError::InvalidStatus => ErrorKind::Validation,

            TillError::Database(_) => ErrorKind::Internal,
        }
    }
}
