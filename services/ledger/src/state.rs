use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use budgetflow_auth_types::identity::JwtSecret;

use crate::infra::db::{DbExpenseRepository, DbIncomeRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn expense_repo(&self) -> DbExpenseRepository {
        DbExpenseRepository {
            db: self.db.clone(),
        }
    }

    pub fn income_repo(&self) -> DbIncomeRepository {
        DbIncomeRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> JwtSecret {
        JwtSecret(state.jwt_secret.clone())
    }
}
