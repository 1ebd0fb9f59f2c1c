//! PinLoginUseCase - spec 4.5 PIN-login variant.
//!
//! A staff member authenticates with a 4-8 digit PIN, looked up by its
//! deterministic keyed-HMAC digest. A successful login does *not* open a
//! till session (the caller must follow up with an explicit till-open
//! request); it only proves identity and mints a token with
//! `till_session_id = None`.

use std::sync::Arc;

use tenancy::TenantHandle;

use crate::domain::auth::{pin_hasher, TillTokenIssuer};
use crate::domain::entities::{validate_pin_format, ActorStatus};
use crate::domain::repositories::{ActorRepository, PinCredentialRepository};
use crate::domain::value_objects::ActorId;
use crate::IdentityConfig;
use crate::IdentityError;

pub struct PinLoginCommand {
    /// The staff profile the caller selected before entering a PIN (e.g. a
    /// name tile on the terminal). Used only to locate a credential to
    /// penalize on a wrong PIN; the digest lookup below is still what
    /// actually authenticates the attempt.
    pub actor_id: ActorId,
    pub pin: String,
}

pub struct PinLoginOutcome {
    pub token: String,
}

pub struct PinLoginUseCase {
    pin_credentials: Arc<dyn PinCredentialRepository>,
    actors: Arc<dyn ActorRepository>,
    token_issuer: Arc<dyn TillTokenIssuer>,
    config: IdentityConfig,
}

impl PinLoginUseCase {
    pub fn new(
        pin_credentials: Arc<dyn PinCredentialRepository>,
        actors: Arc<dyn ActorRepository>,
        token_issuer: Arc<dyn TillTokenIssuer>,
        config: IdentityConfig,
    ) -> Self {
        Self {
            pin_credentials,
            actors,
            token_issuer,
            config,
        }
    }

    pub async fn execute(
        &self,
        tenant: &TenantHandle,
        command: PinLoginCommand,
    ) -> Result<PinLoginOutcome, IdentityError> {
        validate_pin_format(&command.pin)?;

        // A wrong PIN locates no row by digest, so the lockout counter has
        // to live against the selected actor's own credential instead.
        // Checked up front so a locked actor is rejected before the digest
        // is even computed.
        if let Some(throttled) = self.pin_credentials.find_by_actor(tenant, command.actor_id).await? {
            if let Some(remaining_minutes) = throttled.lock_remaining_minutes(chrono::Utc::now()) {
                return Err(IdentityError::PinLocked { remaining_minutes });
            }
        }

        let pin_key = pin_hasher::pin_key(&self.config.pin_pepper, &command.pin);

        let mut credential = match self.pin_credentials.find_by_pin_key(tenant, &pin_key).await? {
            Some(credential) if credential.actor_id() == command.actor_id => credential,
            _ => {
                // Digest matched nothing (or someone else's credential):
                // penalize the selected actor's own row, if they have one.
                if let Some(mut throttled) = self.pin_credentials.find_by_actor(tenant, command.actor_id).await? {
                    throttled.record_failure(self.config.max_pin_attempts, self.config.pin_lock_minutes);
                    self.pin_credentials.save(tenant, &throttled).await?;
                }
                return Err(IdentityError::InvalidCredentials);
            }
        };

        let actor = self
            .actors
            .find_by_id(tenant, credential.actor_id())
            .await?
            .ok_or(IdentityError::ActorNotFound(credential.actor_id().into_uuid()))?;

        if actor.status() != ActorStatus::Active {
            return Err(IdentityError::AccountSuspended(actor.id().into_uuid()));
        }

        credential.record_success();
        self.pin_credentials.save(tenant, &credential).await?;

        let token = self.token_issuer.issue(actor.id(), tenant.tenant_id(), None)?;

        Ok(PinLoginOutcome { token })
    }
}
