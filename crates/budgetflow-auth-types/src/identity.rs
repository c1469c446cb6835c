//! Bearer-identity extractor backed by the access-token JWT.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::BUDGETFLOW_ACCESS_TOKEN;
use crate::token::validate_access_token;

/// JWT signing secret exposed to the [`Identity`] extractor via `FromRef`.
///
/// Services wrap their configured secret in this newtype inside their
/// `AppState` so the extractor can reach it without knowing the state type.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Requesting user resolved from the access token.
///
/// The token is taken from the `Authorization: Bearer` header when present,
/// falling back to the `budgetflow_access_token` cookie. Returns 401 if the
/// token is missing, expired, or fails validation.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub access_token_exp: u64,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let JwtSecret(secret) = JwtSecret::from_ref(state);

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        let cookie = CookieJar::from_headers(&parts.headers)
            .get(BUDGETFLOW_ACCESS_TOKEN)
            .map(|c| c.value().to_owned());

        async move {
            let token = bearer.or(cookie).ok_or(StatusCode::UNAUTHORIZED)?;
            let info =
                validate_access_token(&token, &secret).map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                access_token_exp: info.access_token_exp,
            })
        }
    }
}
