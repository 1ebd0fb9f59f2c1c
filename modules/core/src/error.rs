// Core module errors - branches, POS terminals, order-number allocation.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("branch not found: {0}")]
    BranchNotFound(Uuid),

    #[error("branch code already exists: {0}")]
    BranchCodeExists(String),

    #[error("invalid branch code format")]
    InvalidBranchCode,

    #[error("terminal not found: {0}")]
    TerminalNotFound(Uuid),

    #[error("terminal is not active: {0}")]
    TerminalInactive(Uuid),

    #[error("terminal code already exists: {0}")]
    TerminalCodeExists(String),

    #[error("invalid terminal code format")]
    InvalidTerminalCode,

    #[error("order number allocation failed for branch {0}")]
    OrderNumberAllocationFailed(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::BranchNotFound(_) | CoreError::TerminalNotFound(_) => ErrorKind::NotFound,
            CoreError::BranchCodeExists(_) | CoreError::TerminalCodeExists(_) => {
                ErrorKind::Conflict
            }
            CoreError::InvalidBranchCode | CoreError::InvalidTerminalCode => {
                ErrorKind::Validation
            }
            CoreError::TerminalInactive(_) => ErrorKind::Conflict,
            CoreError::OrderNumberAllocationFailed(_) => ErrorKind::Internal,
            CoreError::Database(_) => ErrorKind::Internal,
        }
    }
}
