use sea_orm::Database;
use tracing::info;

use budgetflow_auth::config::AuthConfig;
use budgetflow_auth::infra::mail::SmtpMailer;
use budgetflow_auth::router::build_router;
use budgetflow_auth::state::AppState;

#[tokio::main]
async fn main() {
    budgetflow_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let mailer = SmtpMailer::new(
        &config.smtp_relay,
        config.smtp_username.clone(),
        config.smtp_password.clone(),
        &config.mail_from,
    )
    .expect("failed to build SMTP mailer");

    let state = AppState {
        db,
        redis,
        mailer,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
