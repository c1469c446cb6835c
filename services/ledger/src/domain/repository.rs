#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Expense, ExpenseDraft, Income, IncomeDraft};
use crate::error::LedgerServiceError;

/// Repository for expense records. Every read and write carries the owner's
/// id; a record owned by someone else behaves as absent.
pub trait ExpenseRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Expense>, LedgerServiceError>;

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, LedgerServiceError>;

    /// Full update of an owned record. `None` when no record with that id
    /// belongs to the user.
    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &ExpenseDraft,
    ) -> Result<Option<Expense>, LedgerServiceError>;

    /// True if a record was deleted.
    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError>;
}

/// Repository for income records, same owner-scoping contract as
/// [`ExpenseRepository`].
pub trait IncomeRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Income>, LedgerServiceError>;

    async fn create(&self, draft: &IncomeDraft) -> Result<Income, LedgerServiceError>;

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &IncomeDraft,
    ) -> Result<Option<Income>, LedgerServiceError>;

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError>;
}
