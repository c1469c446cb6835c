use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness probe both BudgetFlow services
/// mount at the top of their routers.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. Neither service defers readiness today (the
/// database pools connect before the listener binds), so this matches
/// `healthz`; a service can mount its own handler if that changes.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
