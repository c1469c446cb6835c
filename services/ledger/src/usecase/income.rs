//! Income CRUD. Same shape as the expense usecases over its own record
//! type and repository.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::IncomeRepository;
use crate::domain::types::{Income, IncomeCategory, IncomeDraft};
use crate::error::LedgerServiceError;

pub struct IncomeInput {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: IncomeCategory,
}

impl IncomeInput {
    fn into_draft(self, user_id: Uuid) -> Result<IncomeDraft, LedgerServiceError> {
        if self.amount < 0.0 {
            return Err(LedgerServiceError::NegativeAmount);
        }
        Ok(IncomeDraft {
            user_id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            category: self.category,
        })
    }
}

pub struct ListIncomesUseCase<R: IncomeRepository> {
    pub incomes: R,
}

impl<R: IncomeRepository> ListIncomesUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Income>, LedgerServiceError> {
        self.incomes.list_by_user(user_id).await
    }
}

pub struct CreateIncomeUseCase<R: IncomeRepository> {
    pub incomes: R,
}

impl<R: IncomeRepository> CreateIncomeUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: IncomeInput,
    ) -> Result<Income, LedgerServiceError> {
        let draft = input.into_draft(user_id)?;
        self.incomes.create(&draft).await
    }
}

pub struct UpdateIncomeUseCase<R: IncomeRepository> {
    pub incomes: R,
}

impl<R: IncomeRepository> UpdateIncomeUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        id: i32,
        input: IncomeInput,
    ) -> Result<Income, LedgerServiceError> {
        let draft = input.into_draft(user_id)?;
        self.incomes
            .update(user_id, id, &draft)
            .await?
            .ok_or(LedgerServiceError::IncomeNotFound)
    }
}

pub struct DeleteIncomeUseCase<R: IncomeRepository> {
    pub incomes: R,
}

impl<R: IncomeRepository> DeleteIncomeUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, id: i32) -> Result<(), LedgerServiceError> {
        if self.incomes.delete(user_id, id).await? {
            Ok(())
        } else {
            Err(LedgerServiceError::IncomeNotFound)
        }
    }
}
