// PgActorRepository - reads the resolved principal (ActorContext) from the
// tenant's `staff` table and its branch scope assignments.

use async_trait::async_trait;
use sqlx::FromRow;
use tenancy::TenantHandle;
use uuid::Uuid;

use crate::domain::entities::{ActorContext, ActorStatus};
use crate::domain::repositories::ActorRepository;
use crate::domain::value_objects::{ActorId, BranchId};
use crate::IdentityError;

#[derive(FromRow)]
struct StaffRow {
    id: Uuid,
    is_active: bool,
    is_staff: bool,
}

pub struct PgActorRepository;

impl PgActorRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgActorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActorRepository for PgActorRepository {
    async fn find_by_id(
        &self,
        tenant: &TenantHandle,
        id: ActorId,
    ) -> Result<Option<ActorContext>, IdentityError> {
        let row: Option<StaffRow> = sqlx::query_as(
            r#"
            SELECT id, is_active, is_staff
            FROM staff
            WHERE id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let branch_rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT branch_id
            FROM staff_branch_scopes
            WHERE staff_id = $1
            "#,
        )
        .bind(id.into_uuid())
        .fetch_all(tenant.pool())
        .await?;

        let home_branches = branch_rows
            .into_iter()
            .map(|(branch_id,)| BranchId::from_uuid(branch_id))
            .collect();

        let status = if row.is_active {
            ActorStatus::Active
        } else {
            ActorStatus::Suspended
        };

        Ok(Some(ActorContext::new(
            ActorId::from_uuid(row.id),
            tenant.tenant_id(),
            status,
            row.is_staff,
            home_branches,
        )))
    }
}
