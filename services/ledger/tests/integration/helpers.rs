use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use budgetflow_ledger::domain::repository::{ExpenseRepository, IncomeRepository};
use budgetflow_ledger::domain::types::{Expense, ExpenseDraft, Income, IncomeDraft};
use budgetflow_ledger::error::LedgerServiceError;

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: vec![],
            next_id: 1,
        }
    }
}

// ── MockExpenseRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockExpenseRepo {
    table: Arc<Mutex<Table<Expense>>>,
}

impl MockExpenseRepo {
    pub fn empty() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table::new())),
        }
    }

    pub fn rows(&self) -> Vec<Expense> {
        self.table.lock().unwrap().rows.clone()
    }
}

impl ExpenseRepository for MockExpenseRepo {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Expense>, LedgerServiceError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let expense = Expense {
            id: table.next_id,
            user_id: draft.user_id,
            description: draft.description.clone(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        };
        table.next_id += 1;
        table.rows.push(expense.clone());
        Ok(expense)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &ExpenseDraft,
    ) -> Result<Option<Expense>, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let Some(row) = table
            .rows
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
        else {
            return Ok(None);
        };
        row.description = draft.description.clone();
        row.amount = draft.amount;
        row.date = draft.date;
        row.category = draft.category;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|e| !(e.id == id && e.user_id == user_id));
        Ok(table.rows.len() < before)
    }
}

// ── MockIncomeRepo ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockIncomeRepo {
    table: Arc<Mutex<Table<Income>>>,
}

impl MockIncomeRepo {
    pub fn empty() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table::new())),
        }
    }
}

impl IncomeRepository for MockIncomeRepo {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Income>, LedgerServiceError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &IncomeDraft) -> Result<Income, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let income = Income {
            id: table.next_id,
            user_id: draft.user_id,
            description: draft.description.clone(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        };
        table.next_id += 1;
        table.rows.push(income.clone());
        Ok(income)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &IncomeDraft,
    ) -> Result<Option<Income>, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let Some(row) = table
            .rows
            .iter_mut()
            .find(|i| i.id == id && i.user_id == user_id)
        else {
            return Ok(None);
        };
        row.description = draft.description.clone();
        row.amount = draft.amount;
        row.date = draft.date;
        row.category = draft.category;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|i| !(i.id == id && i.user_id == user_id));
        Ok(table.rows.len() < before)
    }
}

pub fn a_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}
