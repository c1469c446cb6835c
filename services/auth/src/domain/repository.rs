#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AuthUser, ResetCode};
use crate::error::AuthServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError>;

    /// True if any account already holds the given username or email.
    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, AuthServiceError>;

    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError>;

    /// Replace the stored credential hash for an account.
    async fn set_password_hash(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError>;
}

/// Key-value store for live reset codes, one slot per user.
///
/// `put` overwrites any prior code for the same user, which is what gives
/// the "at most one live code per user" invariant. Implementations must
/// expire entries after [`crate::domain::types::RESET_CODE_TTL_SECS`], but
/// callers still check `expires_at`: store expiry is a sweep, not the
/// source of truth.
pub trait ResetCodeStore: Send + Sync {
    async fn put(&self, code: &ResetCode) -> Result<(), AuthServiceError>;

    async fn get(&self, user_id: Uuid) -> Result<Option<ResetCode>, AuthServiceError>;

    async fn delete(&self, user_id: Uuid) -> Result<(), AuthServiceError>;
}

/// Outbound email port. Best-effort: callers decide whether a send failure
/// is fatal (for reset codes it is not).
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError>;
}
