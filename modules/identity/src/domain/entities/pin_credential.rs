//! PinCredential - a staff member's PIN login record (spec 4.5, PIN-login variant).
//!
//! The PIN itself is never stored; only `pin_key`, the deterministic keyed
//! HMAC digest of the PIN under the process pepper, is persisted. Lookups
//! go key -> credential, never credential -> plaintext PIN.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenancy::TenantId;
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::value_objects::ActorId;
use crate::IdentityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinCredentialId(Uuid);

impl PinCredentialId {
    pub fn new() -> Self {
        Self(Uuid::new_v7(Timestamp::now(NoContext)))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PinCredentialId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinCredential {
    id: PinCredentialId,
    tenant_id: TenantId,
    actor_id: ActorId,
    pin_key: String,
    failed_attempts: i32,
    locked_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PinCredential {
    /// Creates a fresh PIN credential from a precomputed digest.
    pub fn create(tenant_id: TenantId, actor_id: ActorId, pin_key: String) -> Self {
        let now = Utc::now();
        Self {
            id: PinCredentialId::new(),
            tenant_id,
            actor_id,
            pin_key,
            failed_attempts: 0,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PinCredentialId,
        tenant_id: TenantId,
        actor_id: ActorId,
        pin_key: String,
        failed_attempts: i32,
        locked_until: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            actor_id,
            pin_key,
            failed_attempts,
            locked_until,
            created_at,
            updated_at,
        }
    }

    /// Returns the remaining minutes of lockout at `now`, or `None` if not locked.
    pub fn lock_remaining_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.locked_until.and_then(|until| {
            if until > now {
                Some(((until - now).num_seconds() + 59) / 60)
            } else {
                None
            }
        })
    }

    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.lock_remaining_minutes(now).is_some()
    }

    /// Records a failed PIN attempt; locks the credential once `max_attempts`
    /// consecutive failures have accrued.
    pub fn record_failure(&mut self, max_attempts: i32, lock_minutes: i64) {
        self.failed_attempts += 1;
        if self.failed_attempts >= max_attempts {
            self.locked_until = Some(Utc::now() + chrono::Duration::minutes(lock_minutes));
        }
        self.updated_at = Utc::now();
    }

    pub fn record_success(&mut self) {
        self.failed_attempts = 0;
        self.locked_until = None;
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> PinCredentialId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn pin_key(&self) -> &str {
        &self.pin_key
    }

    pub fn failed_attempts(&self) -> i32 {
        self.failed_attempts
    }

    pub fn locked_until(&self) -> Option<DateTime<Utc>> {
        self.locked_until
    }
}

/// Validates that a PIN string is 4-8 ASCII digits, per spec 4.5.
pub fn validate_pin_format(pin: &str) -> Result<(), IdentityError> {
    if (4..=8).contains(&pin.len()) && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(IdentityError::InvalidPinFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_pin_format_accepts_four_to_eight_digits() {
        assert!(validate_pin_format("1234").is_ok());
        assert!(validate_pin_format("12345678").is_ok());
    }

    #[test]
    fn validate_pin_format_rejects_non_digits_and_bad_length() {
        assert!(validate_pin_format("123").is_err());
        assert!(validate_pin_format("123456789").is_err());
        assert!(validate_pin_format("12a4").is_err());
    }

    #[test]
    fn record_failure_locks_after_max_attempts() {
        let mut cred = PinCredential::create(TenantId::new(), ActorId::new(), "digest".into());
        cred.record_failure(3, 15);
        cred.record_failure(3, 15);
        assert!(!cred.is_locked(Utc::now()));
        cred.record_failure(3, 15);
        assert!(cred.is_locked(Utc::now()));
    }

    #[test]
    fn record_success_resets_lockout_state() {
        let mut cred = PinCredential::create(TenantId::new(), ActorId::new(), "digest".into());
        cred.record_failure(1, 15);
        assert!(cred.is_locked(Utc::now()));

        cred.record_success();
        assert!(!cred.is_locked(Utc::now()));
        assert_eq!(cred.failed_attempts(), 0);
    }

    #[test]
    fn lock_remaining_minutes_rounds_up() {
        let mut cred = PinCredential::create(TenantId::new(), ActorId::new(), "digest".into());
        cred.record_failure(1, 15);
        let remaining = cred.lock_remaining_minutes(Utc::now()).unwrap();
        assert!(remaining <= 15 && remaining > 0);
    }
}
