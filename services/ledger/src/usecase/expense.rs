//! Expense CRUD, scoped to the requesting user.
//!
//! Owner scoping happens in the repository: the usecases pass the bearer's
//! user id with every call and treat "no row" as `ExpenseNotFound`, whether
//! the id never existed or belongs to someone else.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::ExpenseRepository;
use crate::domain::types::{Expense, ExpenseCategory, ExpenseDraft};
use crate::error::LedgerServiceError;

pub struct ExpenseInput {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl ExpenseInput {
    fn into_draft(self, user_id: Uuid) -> Result<ExpenseDraft, LedgerServiceError> {
        if self.amount < 0.0 {
            return Err(LedgerServiceError::NegativeAmount);
        }
        Ok(ExpenseDraft {
            user_id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
        })
    }
}

pub struct ListExpensesUseCase<R: ExpenseRepository> {
    pub expenses: R,
}

impl<R: ExpenseRepository> ListExpensesUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Expense>, LedgerServiceError> {
        self.expenses.list_by_user(user_id).await
    }
}

pub struct CreateExpenseUseCase<R: ExpenseRepository> {
    pub expenses: R,
}

impl<R: ExpenseRepository> CreateExpenseUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: ExpenseInput,
    ) -> Result<Expense, LedgerServiceError> {
        let draft = input.into_draft(user_id)?;
        self.expenses.create(&draft).await
    }
}

pub struct UpdateExpenseUseCase<R: ExpenseRepository> {
    pub expenses: R,
}

impl<R: ExpenseRepository> UpdateExpenseUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        id: i32,
        input: ExpenseInput,
    ) -> Result<Expense, LedgerServiceError> {
        let draft = input.into_draft(user_id)?;
        self.expenses
            .update(user_id, id, &draft)
            .await?
            .ok_or(LedgerServiceError::ExpenseNotFound)
    }
}

pub struct DeleteExpenseUseCase<R: ExpenseRepository> {
    pub expenses: R,
}

impl<R: ExpenseRepository> DeleteExpenseUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, id: i32) -> Result<(), LedgerServiceError> {
        if self.expenses.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(LedgerServiceError::ExpenseNotFound)
        }
    }
}
