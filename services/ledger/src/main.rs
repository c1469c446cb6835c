use sea_orm::Database;
use tracing::info;

use budgetflow_ledger::config::LedgerConfig;
use budgetflow_ledger::router::build_router;
use budgetflow_ledger::state::AppState;

#[tokio::main]
async fn main() {
    budgetflow_core::tracing::init_tracing();

    let config = LedgerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.ledger_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("ledger service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
