// Identity configuration - process-global values read once at startup and
// threaded through explicitly (spec section 9: "global mutable state is
// limited to configuration read at startup... these are inputs to the
// core, not part of it").

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Pepper mixed into the PIN lookup HMAC (spec 4.5). Never persisted.
    pub pin_pepper: Vec<u8>,
    /// Consecutive PIN failures before lockout.
    pub max_pin_attempts: i32,
    /// Lockout duration once `max_pin_attempts` is reached.
    pub pin_lock_minutes: i64,
    /// Secret backing the till-session token claim (spec 4.5).
    pub till_token_secret: Vec<u8>,
    /// Till token lifetime.
    pub till_token_ttl: Duration,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        let pin_pepper = std::env::var("PIN_PEPPER")
            .expect("PIN_PEPPER must be set")
            .into_bytes();
        let max_pin_attempts = std::env::var("PIN_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let pin_lock_minutes = std::env::var("PIN_LOCK_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);
        let till_token_secret = std::env::var("TILL_TOKEN_SECRET")
            .expect("TILL_TOKEN_SECRET must be set")
            .into_bytes();
        let till_token_ttl_hours = std::env::var("TILL_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(12);

        Self {
            pin_pepper,
            max_pin_attempts,
            pin_lock_minutes,
            till_token_secret,
            till_token_ttl: Duration::hours(till_token_ttl_hours),
        }
    }
}
