use budgetflow_auth::error::AuthServiceError;
use budgetflow_auth::usecase::password;
use budgetflow_auth::usecase::register::{RegisterUserInput, RegisterUserUseCase};

use crate::helpers::{MockUserRepo, test_user};

#[tokio::test]
async fn should_create_a_user_with_a_hashed_password() {
    let users = MockUserRepo::empty();

    let created = RegisterUserUseCase {
        users: users.clone(),
    }
    .execute(RegisterUserInput {
        username: "alice".into(),
        email: "a@x.com".into(),
        password: "hunter2".into(),
    })
    .await
    .unwrap();

    let stored = users.users_handle().lock().unwrap()[0].clone();
    assert_eq!(stored, created);
    assert_eq!(stored.username, "alice");
    assert_eq!(stored.email, "a@x.com");
    // Never the plaintext.
    assert_ne!(stored.password_hash, "hunter2");
    assert!(password::verify_password(&stored.password_hash, "hunter2").unwrap());
}

#[tokio::test]
async fn should_reject_a_duplicate_email() {
    let existing = test_user("hunter2");
    let users = MockUserRepo::new(vec![existing.clone()]);

    let err = RegisterUserUseCase {
        users: users.clone(),
    }
    .execute(RegisterUserInput {
        username: "someone_else".into(),
        email: existing.email.clone(),
        password: "hunter2".into(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AuthServiceError::UserAlreadyExists));
    assert_eq!(users.users_handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_a_duplicate_username() {
    let existing = test_user("hunter2");
    let users = MockUserRepo::new(vec![existing.clone()]);

    let err = RegisterUserUseCase { users }
        .execute(RegisterUserInput {
            username: existing.username.clone(),
            email: "other@x.com".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthServiceError::UserAlreadyExists));
}
