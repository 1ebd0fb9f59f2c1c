// PgPosTerminalRepository - Postgres adapter for PosTerminal persistence.

use async_trait::async_trait;
use identity::BranchId;
use sqlx::FromRow;
use tenancy::TenantHandle;
use uuid::Uuid;

use crate::domain::entities::{PosTerminal, TerminalStatus};
use crate::domain::repositories::PosTerminalRepository;
use crate::domain::value_objects::{TerminalCode, TerminalId};
use crate::CoreError;

#[derive(FromRow)]
struct PosTerminalRow {
    id: Uuid,
    branch_id: Uuid,
    machine_id: String,
    name: String,
    status: String,
}

fn row_to_terminal(row: PosTerminalRow) -> Result<PosTerminal, CoreError> {
    let status = match row.status.as_str() {
        "active" => TerminalStatus::Active,
        "maintenance" => TerminalStatus::Maintenance,
        "retired" => TerminalStatus::Retired,
        _ => TerminalStatus::Active,
    };

    Ok(PosTerminal::reconstitute(
        TerminalId::from_uuid(row.id),
        BranchId::from_uuid(row.branch_id),
        TerminalCode::new(&row.machine_id)?,
        row.name,
        status,
    ))
}

fn status_str(status: TerminalStatus) -> &'static str {
    match status {
        TerminalStatus::Active => "active",
        TerminalStatus::Maintenance => "maintenance",
        TerminalStatus::Retired => "retired",
    }
}

pub struct PgPosTerminalRepository;

impl PgPosTerminalRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgPosTerminalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PosTerminalRepository for PgPosTerminalRepository {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: TerminalId,
    ) -> Result<Option<PosTerminal>, CoreError> {
        let row: Option<PosTerminalRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, machine_id, name, status
            FROM pos_terminals
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(row_to_terminal).transpose()
    }

    async fn find_by_machine_id(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
        machine_id: &TerminalCode,
    ) -> Result<Option<PosTerminal>, CoreError> {
        let row: Option<PosTerminalRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, machine_id, name, status
            FROM pos_terminals
            WHERE branch_id = $1 AND machine_id = $2
            "#,
        )
        .bind(branch_id.into_uuid())
        .bind(machine_id.as_str())
        .fetch_optional(tenant.pool())
        .await?;

        row.map(row_to_terminal).transpose()
    }

    async fn list_by_branch(
        &self,
        tenant: &TenantHandle,
        branch_id: BranchId,
    ) -> Result<Vec<PosTerminal>, CoreError> {
        let rows: Vec<PosTerminalRow> = sqlx::query_as(
            r#"
            SELECT id, branch_id, machine_id, name, status
            FROM pos_terminals
            WHERE branch_id = $1
            ORDER BY name
            "#,
        )
        .bind(branch_id.into_uuid())
        .fetch_all(tenant.pool())
        .await?;

        rows.into_iter().map(row_to_terminal).collect()
    }

    async fn create(&self, tenant: &TenantHandle, terminal: &PosTerminal) -> Result<(), CoreError> {
        sqlx::query(
            r#"
            INSERT INTO pos_terminals (id, branch_id, machine_id, name, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            "#,
        )
        .bind(terminal.id().into_uuid())
        .bind(terminal.branch_id().into_uuid())
        .bind(terminal.machine_id().as_str())
        .bind(terminal.name())
        .bind(status_str(terminal.status()))
        .execute(tenant.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                CoreError::TerminalCodeExists(terminal.machine_id().as_str().to_string())
            }
            other => CoreError::Database(other),
        })?;

        Ok(())
    }

    async fn save(&self, tenant: &TenantHandle, terminal: &PosTerminal) -> Result<(), CoreError> {
        sqlx::query(
            r#"
            UPDATE pos_terminals
            SET name = $2, status = $3, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(terminal.id().into_uuid())
        .bind(terminal.name())
        .bind(status_str(terminal.status()))
        .execute(tenant.pool())
        .await?;

        Ok(())
    }
}
