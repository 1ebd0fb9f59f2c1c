// PinCredentialRepository port - keyed lookup and mutation of PIN login
// records (spec 4.5 PIN-login variant). Lookup is always by `pin_key`
// (the HMAC digest), never by plaintext PIN or by actor, so a brute-force
// attempt against one actor's PIN cannot be distinguished from a scan
// across the tenant's whole PIN space without the pepper.

use async_trait::async_trait;
use tenancy::TenantHandle;

use crate::domain::entities::PinCredential;
use crate::domain::value_objects::ActorId;
use crate::IdentityError;

#[async_trait]
pub trait PinCredentialRepository: Send + Sync {
    async fn find_by_pin_key(
        &self,
        tenant: &TenantHandle,
        pin_key: &str,
    ) -> Result<Option<PinCredential>, IdentityError>;

    async fn find_by_actor(
        &self,
        tenant: &TenantHandle,
        actor_id: ActorId,
    ) -> Result<Option<PinCredential>, IdentityError>;

    /// Inserts a brand new credential. Violates the `pinKey` sparse unique
    /// index (spec 6) with `IdentityError::DuplicatePin` if another actor
    /// already holds that digest.
    async fn create(
        &self,
        tenant: &TenantHandle,
        credential: &PinCredential,
    ) -> Result<(), IdentityError>;

    /// Persists failed-attempt/lockout/success state changes in place.
    async fn save(
        &self,
        tenant: &TenantHandle,
        credential: &PinCredential,
    ) -> Result<(), IdentityError>;
}
