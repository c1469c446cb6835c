//! argon2 credential hashing.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::AuthServiceError;

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a candidate password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; an unparseable stored hash is an
/// internal error, not a failed login.
pub fn verify_password(stored_hash: &str, candidate: &str) -> Result<bool, AuthServiceError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("parse stored hash: {e}")))?;
    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthServiceError::Internal(anyhow::anyhow!(
            "verify password: {e}"
        ))),
    }
}
