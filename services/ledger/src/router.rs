use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use budgetflow_core::health::{healthz, readyz};
use budgetflow_core::middleware::request_id_layer;

use crate::handlers::{
    expense::{create_expense, delete_expense, list_expenses, update_expense},
    income::{create_income, delete_income, list_incomes, update_income},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Expenses
        .route("/ledger/expenses", get(list_expenses))
        .route("/ledger/expenses", post(create_expense))
        .route("/ledger/expenses/{id}", put(update_expense))
        .route("/ledger/expenses/{id}", delete(delete_expense))
        // Incomes
        .route("/ledger/incomes", get(list_incomes))
        .route("/ledger/incomes", post(create_income))
        .route("/ledger/incomes/{id}", put(update_income))
        .route("/ledger/incomes/{id}", delete(delete_income))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
