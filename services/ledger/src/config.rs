/// Ledger service configuration loaded from environment variables.
#[derive(Debug)]
pub struct LedgerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for validating JWT access tokens. Must match the secret
    /// the auth service signs with.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3120). Env var: `LEDGER_PORT`.
    pub ledger_port: u16,
}

impl LedgerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            ledger_port: std::env::var("LEDGER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3120),
        }
    }
}
