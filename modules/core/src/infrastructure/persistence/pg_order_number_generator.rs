// PgOrderNumberGenerator - atomic per-(branch, prefix, date) counter.
//
// Grounded on this workspace's terminal invoice-number allocator: lock the
// counter row with `FOR UPDATE`, increment, return the pre-increment value.
// Unlike that allocator this one owns a disjoint table and upserts the row
// on first use instead of requiring it to be provisioned ahead of time.

use async_trait::async_trait;
use chrono::NaiveDate;
use identity::BranchId;
use sqlx::{FromRow, Postgres, Transaction};

use crate::domain::repositories::OrderNumberGenerator;
use crate::CoreError;

#[derive(FromRow)]
struct CounterRow {
    current_value: i64,
}

pub struct PgOrderNumberGenerator;

impl PgOrderNumberGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgOrderNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderNumberGenerator for PgOrderNumberGenerator {
    async fn next(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        branch_id: BranchId,
        prefix: &str,
        date: NaiveDate,
    ) -> Result<String, CoreError> {
        sqlx::query(
            r#"
            INSERT INTO order_number_counters (branch_id, prefix, date_key, current_value)
            VALUES ($1, $2, $3, 0)
            ON CONFLICT (branch_id, prefix, date_key) DO NOTHING
            "#,
        )
        .bind(branch_id.into_uuid())
        .bind(prefix)
        .bind(date)
        .execute(&mut **tx)
        .await?;

        let row: CounterRow = sqlx::query_as(
            r#"
            UPDATE order_number_counters
            SET current_value = current_value + 1
            WHERE branch_id = $1 AND prefix = $2 AND date_key = $3
            RETURNING current_value
            "#,
        )
        .bind(branch_id.into_uuid())
        .bind(prefix)
        .bind(date)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(CoreError::OrderNumberAllocationFailed(branch_id.into_uuid()))?;

        Ok(format!("{prefix}-{}-{:04}", date.format("%Y%m%d"), row.current_value))
    }
}
