use uuid::Uuid;

use budgetflow_ledger::domain::types::ExpenseCategory;
use budgetflow_ledger::error::LedgerServiceError;
use budgetflow_ledger::usecase::expense::{
    CreateExpenseUseCase, DeleteExpenseUseCase, ExpenseInput, ListExpensesUseCase,
    UpdateExpenseUseCase,
};

use crate::helpers::{MockExpenseRepo, a_date};

fn input(description: &str, amount: f64, category: ExpenseCategory) -> ExpenseInput {
    ExpenseInput {
        description: description.into(),
        amount,
        date: a_date(),
        category,
    }
}

#[tokio::test]
async fn should_create_and_list_only_own_expenses() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();
    let bob = Uuid::now_v7();

    let create = CreateExpenseUseCase {
        expenses: repo.clone(),
    };
    let groceries = create
        .execute(alice, input("groceries", 42.5, ExpenseCategory::Food))
        .await
        .unwrap();
    create
        .execute(bob, input("bus pass", 30.0, ExpenseCategory::Transport))
        .await
        .unwrap();

    let listed = ListExpensesUseCase {
        expenses: repo.clone(),
    }
    .execute(alice)
    .await
    .unwrap();

    assert_eq!(listed, vec![groceries.clone()]);
    assert_eq!(groceries.user_id, alice);
    assert_eq!(groceries.category, ExpenseCategory::Food);
}

#[tokio::test]
async fn should_reject_negative_amount_on_create() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();

    let err = CreateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, input("refund?", -5.0, ExpenseCategory::Other))
    .await
    .unwrap_err();

    assert!(matches!(err, LedgerServiceError::NegativeAmount));
    assert!(repo.rows().is_empty());
}

#[tokio::test]
async fn should_update_an_owned_expense() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();

    let created = CreateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, input("groceries", 42.5, ExpenseCategory::Food))
    .await
    .unwrap();

    let updated = UpdateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(
        alice,
        created.id,
        input("weekly groceries", 55.0, ExpenseCategory::Food),
    )
    .await
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "weekly groceries");
    assert_eq!(updated.amount, 55.0);
}

#[tokio::test]
async fn should_reject_negative_amount_on_update() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();

    let created = CreateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, input("groceries", 42.5, ExpenseCategory::Food))
    .await
    .unwrap();

    let err = UpdateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, created.id, input("groceries", -1.0, ExpenseCategory::Food))
    .await
    .unwrap_err();

    assert!(matches!(err, LedgerServiceError::NegativeAmount));
    assert_eq!(repo.rows()[0].amount, 42.5);
}

#[tokio::test]
async fn should_treat_another_users_expense_as_absent() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();
    let bob = Uuid::now_v7();

    let created = CreateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, input("groceries", 42.5, ExpenseCategory::Food))
    .await
    .unwrap();

    let err = UpdateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(bob, created.id, input("hijack", 1.0, ExpenseCategory::Other))
    .await
    .unwrap_err();
    assert!(matches!(err, LedgerServiceError::ExpenseNotFound));

    let err = DeleteExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(bob, created.id)
    .await
    .unwrap_err();
    assert!(matches!(err, LedgerServiceError::ExpenseNotFound));

    // Alice's record is untouched.
    assert_eq!(repo.rows(), vec![created]);
}

#[tokio::test]
async fn should_delete_an_owned_expense_once() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();

    let created = CreateExpenseUseCase {
        expenses: repo.clone(),
    }
    .execute(alice, input("groceries", 42.5, ExpenseCategory::Food))
    .await
    .unwrap();

    let delete = DeleteExpenseUseCase {
        expenses: repo.clone(),
    };
    delete.execute(alice, created.id).await.unwrap();

    let err = delete.execute(alice, created.id).await.unwrap_err();
    assert!(matches!(err, LedgerServiceError::ExpenseNotFound));
    assert!(repo.rows().is_empty());
}

#[tokio::test]
async fn should_reject_update_of_missing_expense() {
    let repo = MockExpenseRepo::empty();
    let alice = Uuid::now_v7();

    let err = UpdateExpenseUseCase { expenses: repo }
        .execute(alice, 999, input("ghost", 1.0, ExpenseCategory::Other))
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerServiceError::ExpenseNotFound));
}
