// Tenancy module error types

use thiserror::Error;

/// The disposition category a caller-facing translation layer should map an
/// error to. The core never picks an HTTP status itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

#[derive(Debug, Error)]
pub enum TenancyError {
    #[error("unknown tenant key: {0}")]
    UnknownTenant(String),

    #[error("tenant {0} is disabled")]
    TenantDisabled(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TenancyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TenancyError::UnknownTenant(_) => ErrorKind::NotFound,
            TenancyError::TenantDisabled(_) => ErrorKind::Validation,
            TenancyError::Database(_) => ErrorKind::Internal,
        }
    }
}
