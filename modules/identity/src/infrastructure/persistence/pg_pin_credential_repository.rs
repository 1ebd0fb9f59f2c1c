// PgPinCredentialRepository - Postgres adapter for PinCredential persistence.
// `pin_key` carries the sparse unique index from spec 6
// (`(tenant_users.pinKey) sparse`); a duplicate insert maps to
// `IdentityError::DuplicatePin`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tenancy::TenantHandle;
use uuid::Uuid;

use crate::domain::entities::PinCredential;
use crate::domain::repositories::PinCredentialRepository;
use crate::domain::value_objects::ActorId;
use crate::IdentityError;

#[derive(FromRow)]
struct PinCredentialRow {
    id: Uuid,
    actor_id: Uuid,
    pin_key: String,
    failed_attempts: i32,
    locked_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PinCredentialRow {
    fn into_entity(self, tenant: &TenantHandle) -> PinCredential {
        PinCredential::reconstitute(
            crate::domain::entities::PinCredentialId::from_uuid(self.id),
            tenant.tenant_id(),
            ActorId::from_uuid(self.actor_id),
            self.pin_key,
            self.failed_attempts,
            self.locked_until,
            self.created_at,
            self.updated_at,
        )
    }
}

pub struct PgPinCredentialRepository;

impl PgPinCredentialRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PgPinCredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PinCredentialRepository for PgPinCredentialRepository {
    async fn find_by_pin_key(
        &self,
        tenant: &TenantHandle,
        pin_key: &str,
    ) -> Result<Option<PinCredential>, IdentityError> {
        let row: Option<PinCredentialRow> = sqlx::query_as(
            r#"
            SELECT id, actor_id, pin_key, failed_attempts, locked_until, created_at, updated_at
            FROM pin_credentials
            WHERE pin_key = $1
            "#,
        )
        .bind(pin_key)
        .fetch_optional(tenant.pool())
        .await?;

        Ok(row.map(|r| r.into_entity(tenant)))
    }

    async fn find_by_actor(
        &self,
        tenant: &TenantHandle,
        actor_id: ActorId,
    ) -> Result<Option<PinCredential>, IdentityError> {
        let row: Option<PinCredentialRow> = sqlx::query_as(
            r#"
            SELECT id, actor_id, pin_key, failed_attempts, locked_until, created_at, updated_at
            FROM pin_credentials
            WHERE actor_id = $1
            "#,
        )
        .bind(actor_id.into_uuid())
        .fetch_optional(tenant.pool())
        .await?;

        Ok(row.map(|r| r.into_entity(tenant)))
    }

    async fn create(
        &self,
        tenant: &TenantHandle,
        credential: &PinCredential,
    ) -> Result<(), IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO pin_credentials
                (id, actor_id, pin_key, failed_attempts, locked_until, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(credential.id().into_uuid())
        .bind(credential.actor_id().into_uuid())
        .bind(credential.pin_key())
        .bind(credential.failed_attempts())
        .bind(credential.locked_until())
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(tenant.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                IdentityError::DuplicatePin
            }
            other => IdentityError::Database(other),
        })?;

        Ok(())
    }

    async fn save(
        &self,
        tenant: &TenantHandle,
        credential: &PinCredential,
    ) -> Result<(), IdentityError> {
        sqlx::query(
            r#"
            UPDATE pin_credentials
            SET failed_attempts = $2, locked_until = $3, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(credential.id().into_uuid())
        .bind(credential.failed_attempts())
        .bind(credential.locked_until())
        .execute(tenant.pool())
        .await?;

        Ok(())
    }
}
