//! Password-reset code lifecycle.
//!
//! A code moves `ABSENT → LIVE` when a reset is requested and back to
//! `ABSENT` on redemption, expiry, or a superseding request. There are no
//! other states. A concurrent request/redeem pair for the same user races
//! without locking; the loser gets `InvalidOrExpiredCode` and retries.

use chrono::{Duration, Utc};
use rand::RngExt;

use crate::domain::repository::{Mailer, ResetCodeStore, UserRepository};
use crate::domain::types::{RESET_CODE_LEN, RESET_CODE_TTL_SECS, ResetCode};
use crate::error::AuthServiceError;
use crate::usecase::password;

const RESET_MAIL_SUBJECT: &str = "Your BudgetFlow password reset code";

/// Draw a 6-digit decimal code uniformly from 000000–999999.
/// Leading zeros are valid codes, not formatting artifacts.
fn generate_code() -> String {
    let mut rng = rand::rng();
    format!(
        "{:0width$}",
        rng.random_range(0..1_000_000u32),
        width = RESET_CODE_LEN
    )
}

// ── RequestPasswordReset ─────────────────────────────────────────────────────

pub struct RequestPasswordResetInput {
    pub email: String,
}

pub struct RequestPasswordResetUseCase<U, C, M>
where
    U: UserRepository,
    C: ResetCodeStore,
    M: Mailer,
{
    pub users: U,
    pub codes: C,
    pub mailer: M,
}

impl<U, C, M> RequestPasswordResetUseCase<U, C, M>
where
    U: UserRepository,
    C: ResetCodeStore,
    M: Mailer,
{
    pub async fn execute(
        &self,
        input: RequestPasswordResetInput,
    ) -> Result<(), AuthServiceError> {
        // 1. Resolve the account → 404 if unknown. This reveals whether an
        // email is registered; matches the legacy responses on purpose.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        // 2. Store a fresh code, superseding any live one for this user.
        let now = Utc::now();
        let code = ResetCode {
            user_id: user.id,
            code: generate_code(),
            issued_at: now,
            expires_at: now + Duration::seconds(RESET_CODE_TTL_SECS),
        };
        self.codes.put(&code).await?;

        // 3. Deliver out-of-band, best-effort. A lost email must not undo the
        // stored code; the user just requests again. The code never appears
        // in the HTTP response.
        let body = format!(
            "Your password reset code is {}. It expires in one hour.",
            code.code
        );
        if let Err(e) = self.mailer.send(&user.email, RESET_MAIL_SUBJECT, &body).await {
            tracing::warn!(error = %e, "failed to send password reset email");
        }

        Ok(())
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

pub struct ResetPasswordUseCase<U, C>
where
    U: UserRepository,
    C: ResetCodeStore,
{
    pub users: U,
    pub codes: C,
}

impl<U, C> ResetPasswordUseCase<U, C>
where
    U: UserRepository,
    C: ResetCodeStore,
{
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), AuthServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        // Absent, expired, and mismatched all map to the same error so the
        // response never tells a caller whether a live code exists.
        let stored = match self.codes.get(user.id).await? {
            Some(code) if !code.is_expired() => code,
            _ => return Err(AuthServiceError::InvalidOrExpiredCode),
        };
        if stored.code != input.code {
            return Err(AuthServiceError::InvalidOrExpiredCode);
        }

        // Set the new credential, then consume the code. Single use: once
        // deleted, the same code can never redeem again.
        let new_hash = password::hash_password(&input.new_password)?;
        self.users.set_password_hash(user.id, &new_hash).await?;
        self.codes.delete(user.id).await?;

        Ok(())
    }
}
