use anyhow::Context as _;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use uuid::Uuid;

use crate::domain::repository::ResetCodeStore;
use crate::domain::types::{RESET_CODE_TTL_SECS, ResetCode};
use crate::error::AuthServiceError;

/// Redis-backed reset-code store. One key per user, so a new code for the
/// same user overwrites the old one. The key TTL matches the code lifetime
/// and acts as the storage sweep; expiry itself is checked by the usecase.
#[derive(Clone)]
pub struct RedisResetCodeStore {
    pub pool: Pool,
}

fn reset_code_key(user_id: Uuid) -> String {
    format!("password_reset:{user_id}")
}

impl ResetCodeStore for RedisResetCodeStore {
    async fn put(&self, code: &ResetCode) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = reset_code_key(code.user_id);
        let value = serde_json::to_vec(code).context("encode reset code")?;
        let (): () = conn
            .set_ex(&key, value, RESET_CODE_TTL_SECS as u64)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<ResetCode>, AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = reset_code_key(user_id);
        let value: Option<Vec<u8>> = conn
            .get(&key)
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        value
            .map(|bytes| serde_json::from_slice(&bytes).context("decode reset code"))
            .transpose()
            .map_err(AuthServiceError::Internal)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let key = reset_code_key(user_id);
        let (): () = conn
            .del(&key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}
