use async_trait::async_trait;
use chrono::NaiveDate;
use identity::BranchId;
use sqlx::{Postgres, Transaction};

use crate::CoreError;

/// Allocates the next customer-facing order number for a
/// `(branch, prefix, date)` bucket. Must be called with the same
/// transaction the caller intends to commit the order under, so a failed
/// commit rolls the allocation back with it.
#[async_trait]
pub trait OrderNumberGenerator: Send + Sync {
    async fn next(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        branch_id: BranchId,
        prefix: &str,
        date: NaiveDate,
    ) -> Result<String, CoreError>;
}
