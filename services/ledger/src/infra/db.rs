use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use budgetflow_ledger_schema::{expenses, incomes};

use crate::domain::repository::{ExpenseRepository, IncomeRepository};
use crate::domain::types::{
    Expense, ExpenseCategory, ExpenseDraft, Income, IncomeCategory, IncomeDraft,
};
use crate::error::LedgerServiceError;

#[derive(Clone)]
pub struct DbExpenseRepository {
    pub db: DatabaseConnection,
}

fn expense_from_model(model: expenses::Model) -> Expense {
    Expense {
        id: model.id,
        user_id: model.user_id,
        description: model.description,
        amount: model.amount,
        date: model.date,
        category: ExpenseCategory::from(model.category.as_str()),
    }
}

impl ExpenseRepository for DbExpenseRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Expense>, LedgerServiceError> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_desc(expenses::Column::Date)
            .all(&self.db)
            .await
            .context("list expenses")?;
        Ok(models.into_iter().map(expense_from_model).collect())
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, LedgerServiceError> {
        let model = expenses::ActiveModel {
            user_id: Set(draft.user_id),
            description: Set(draft.description.clone()),
            amount: Set(draft.amount),
            date: Set(draft.date),
            category: Set(draft.category.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create expense")?;
        Ok(expense_from_model(model))
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &ExpenseDraft,
    ) -> Result<Option<Expense>, LedgerServiceError> {
        // Owner check first: the update itself keys on the primary key only.
        let found = expenses::Entity::find_by_id(id)
            .filter(expenses::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find expense for update")?;
        if found.is_none() {
            return Ok(None);
        }

        let model = expenses::ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            description: Set(draft.description.clone()),
            amount: Set(draft.amount),
            date: Set(draft.date),
            category: Set(draft.category.as_str().to_owned()),
        }
        .update(&self.db)
        .await
        .context("update expense")?;
        Ok(Some(expense_from_model(model)))
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError> {
        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(id))
            .filter(expenses::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete expense")?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct DbIncomeRepository {
    pub db: DatabaseConnection,
}

fn income_from_model(model: incomes::Model) -> Income {
    Income {
        id: model.id,
        user_id: model.user_id,
        description: model.description,
        amount: model.amount,
        date: model.date,
        category: IncomeCategory::from(model.category.as_str()),
    }
}

impl IncomeRepository for DbIncomeRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Income>, LedgerServiceError> {
        let models = incomes::Entity::find()
            .filter(incomes::Column::UserId.eq(user_id))
            .order_by_desc(incomes::Column::Date)
            .all(&self.db)
            .await
            .context("list incomes")?;
        Ok(models.into_iter().map(income_from_model).collect())
    }

    async fn create(&self, draft: &IncomeDraft) -> Result<Income, LedgerServiceError> {
        let model = incomes::ActiveModel {
            user_id: Set(draft.user_id),
            description: Set(draft.description.clone()),
            amount: Set(draft.amount),
            date: Set(draft.date),
            category: Set(draft.category.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create income")?;
        Ok(income_from_model(model))
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        draft: &IncomeDraft,
    ) -> Result<Option<Income>, LedgerServiceError> {
        let found = incomes::Entity::find_by_id(id)
            .filter(incomes::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find income for update")?;
        if found.is_none() {
            return Ok(None);
        }

        let model = incomes::ActiveModel {
            id: Set(id),
            user_id: Set(user_id),
            description: Set(draft.description.clone()),
            amount: Set(draft.amount),
            date: Set(draft.date),
            category: Set(draft.category.as_str().to_owned()),
        }
        .update(&self.db)
        .await
        .context("update income")?;
        Ok(Some(income_from_model(model)))
    }

    async fn delete(&self, user_id: Uuid, id: i32) -> Result<bool, LedgerServiceError> {
        let result = incomes::Entity::delete_many()
            .filter(incomes::Column::Id.eq(id))
            .filter(incomes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete income")?;
        Ok(result.rows_affected > 0)
    }
}
