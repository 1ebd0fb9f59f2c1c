//! TillTokenIssuer - mints/decodes the one token claim the core's
//! till-session lifecycle (spec 4.5) requires: `till_session_id`, embedded
//! on a successful till-open and cleared (`null`) on close.
//!
//! This is deliberately *not* general authentication/JWT issuance (that
//! remains out of core scope, per spec 1). It is the narrow claim the
//! order-commit preflight (spec 4.6 step 5) needs to read back from the
//! caller's existing session token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::value_objects::ActorId;
use crate::IdentityError;
use tenancy::TenantId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillTokenClaims {
    /// Actor (staff member) the token was issued to.
    pub sub: Uuid,
    pub tenant_id: Uuid,
    /// The currently open till session, or `None` once closed.
    pub till_session_id: Option<Uuid>,
    pub exp: usize,
}

pub trait TillTokenIssuer: Send + Sync {
    /// Mints a token embedding (or clearing) `till_session_id`, per spec
    /// 4.5: "a new authorization token that embeds `tillSessionId`" on open,
    /// and "a new token with `tillSessionId = null`" on close.
    fn issue(
        &self,
        actor_id: ActorId,
        tenant_id: TenantId,
        till_session_id: Option<Uuid>,
    ) -> Result<String, IdentityError>;

    /// Decodes a token, recovering the embedded `till_session_id` (if any)
    /// for the order-commit preflight's step 5 fallback.
    fn decode(&self, token: &str) -> Result<TillTokenClaims, IdentityError>;
}

pub struct JwtTillTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTillTokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }
}

impl TillTokenIssuer for JwtTillTokenIssuer {
    fn issue(
        &self,
        actor_id: ActorId,
        tenant_id: TenantId,
        till_session_id: Option<Uuid>,
    ) -> Result<String, IdentityError> {
        let exp = (Utc::now() + self.ttl).timestamp() as usize;
        let claims = TillTokenClaims {
            sub: actor_id.into_uuid(),
            tenant_id: tenant_id.into_uuid(),
            till_session_id,
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| IdentityError::Token(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<TillTokenClaims, IdentityError> {
        decode::<TillTokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| IdentityError::Token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtTillTokenIssuer {
        JwtTillTokenIssuer::new(b"test-secret-at-least-32-bytes-long", Duration::hours(12))
    }

    #[test]
    fn round_trips_till_session_id() {
        let issuer = issuer();
        let actor = ActorId::new();
        let tenant = TenantId::new();
        let till_session_id = Some(Uuid::new_v7(Timestamp::now(NoContext)));

        let token = issuer.issue(actor, tenant, till_session_id).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.sub, actor.into_uuid());
        assert_eq!(claims.till_session_id, till_session_id);
    }

    #[test]
    fn close_clears_till_session_id() {
        let issuer = issuer();
        let token = issuer.issue(ActorId::new(), TenantId::new(), None).unwrap();
        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.till_session_id, None);
    }
}
