use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;

use budgetflow_auth_types::identity::Identity;

use crate::domain::types::{Income, IncomeCategory};
use crate::error::LedgerServiceError;
use crate::state::AppState;
use crate::usecase::income::{
    CreateIncomeUseCase, DeleteIncomeUseCase, IncomeInput, ListIncomesUseCase, UpdateIncomeUseCase,
};

#[derive(Deserialize)]
pub struct IncomeRequest {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: IncomeCategory,
}

impl IncomeRequest {
    fn into_input(self) -> IncomeInput {
        IncomeInput {
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
        }
    }
}

// ── GET /ledger/incomes ──────────────────────────────────────────────────────

pub async fn list_incomes(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<Income>>, LedgerServiceError> {
    let usecase = ListIncomesUseCase {
        incomes: state.income_repo(),
    };
    Ok(Json(usecase.execute(identity.user_id).await?))
}

// ── POST /ledger/incomes ─────────────────────────────────────────────────────

pub async fn create_income(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<IncomeRequest>,
) -> Result<(StatusCode, Json<Income>), LedgerServiceError> {
    let usecase = CreateIncomeUseCase {
        incomes: state.income_repo(),
    };
    let income = usecase.execute(identity.user_id, body.into_input()).await?;
    Ok((StatusCode::CREATED, Json(income)))
}

// ── PUT /ledger/incomes/{id} ─────────────────────────────────────────────────

pub async fn update_income(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(body): Json<IncomeRequest>,
) -> Result<Json<Income>, LedgerServiceError> {
    let usecase = UpdateIncomeUseCase {
        incomes: state.income_repo(),
    };
    let income = usecase
        .execute(identity.user_id, id, body.into_input())
        .await?;
    Ok(Json(income))
}

// ── DELETE /ledger/incomes/{id} ──────────────────────────────────────────────

pub async fn delete_income(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<StatusCode, LedgerServiceError> {
    let usecase = DeleteIncomeUseCase {
        incomes: state.income_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
