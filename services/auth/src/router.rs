use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use budgetflow_core::health::{healthz, readyz};
use budgetflow_core::middleware::request_id_layer;

use crate::handlers::{
    password::{request_password_reset, reset_password},
    token::{check_token, create_token, refresh_token, revoke_token},
    user::register,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/auth/users", post(register))
        // Token
        .route("/auth/token", get(check_token))
        .route("/auth/token", post(create_token))
        .route("/auth/token", patch(refresh_token))
        .route("/auth/token", delete(revoke_token))
        // Password reset
        .route("/auth/password/reset", post(request_password_reset))
        .route("/auth/password", patch(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
