use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;

use budgetflow_auth_types::identity::Identity;

use crate::domain::types::{Expense, ExpenseCategory};
use crate::error::LedgerServiceError;
use crate::state::AppState;
use crate::usecase::expense::{
    CreateExpenseUseCase, DeleteExpenseUseCase, ExpenseInput, ListExpensesUseCase,
    UpdateExpenseUseCase,
};

#[derive(Deserialize)]
pub struct ExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: ExpenseCategory,
}

impl ExpenseRequest {
    fn into_input(self) -> ExpenseInput {
        ExpenseInput {
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
        }
    }
}

// ── GET /ledger/expenses ─────────────────────────────────────────────────────

pub async fn list_expenses(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<Expense>>, LedgerServiceError> {
    let usecase = ListExpensesUseCase {
        expenses: state.expense_repo(),
    };
    Ok(Json(usecase.execute(identity.user_id).await?))
}

// ── POST /ledger/expenses ────────────────────────────────────────────────────

pub async fn create_expense(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<ExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), LedgerServiceError> {
    let usecase = CreateExpenseUseCase {
        expenses: state.expense_repo(),
    };
    let expense = usecase.execute(identity.user_id, body.into_input()).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

// ── PUT /ledger/expenses/{id} ────────────────────────────────────────────────

pub async fn update_expense(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
    Json(body): Json<ExpenseRequest>,
) -> Result<Json<Expense>, LedgerServiceError> {
    let usecase = UpdateExpenseUseCase {
        expenses: state.expense_repo(),
    };
    let expense = usecase
        .execute(identity.user_id, id, body.into_input())
        .await?;
    Ok(Json(expense))
}

// ── DELETE /ledger/expenses/{id} ─────────────────────────────────────────────

pub async fn delete_expense(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<StatusCode, LedgerServiceError> {
    let usecase = DeleteExpenseUseCase {
        expenses: state.expense_repo(),
    };
    usecase.execute(identity.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
