use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account record as seen by the auth usecases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// One-time password-reset code, delivered to the user via email.
///
/// Ephemeral: stored in Redis keyed by `user_id`, never in Postgres. The
/// Redis TTL only reclaims storage; expiry is decided by comparing
/// `expires_at` against the wall clock at lookup, so a code that outlives
/// its TTL sweep still reads as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCode {
    pub user_id: Uuid,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ResetCode {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Reset code length in decimal digits.
pub const RESET_CODE_LEN: usize = 6;

/// Reset code time-to-live in seconds (1 hour).
pub const RESET_CODE_TTL_SECS: i64 = 3600;
