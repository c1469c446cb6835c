use budgetflow_auth::error::AuthServiceError;
use budgetflow_auth::usecase::token::{CreateTokenInput, CreateTokenUseCase, RefreshTokenUseCase};
use budgetflow_auth_types::token::{validate_access_token, validate_token};

use crate::helpers::{MockUserRepo, test_user};

const SECRET: &str = "test-secret";

#[tokio::test]
async fn should_issue_tokens_for_valid_credentials() {
    let user = test_user("hunter2");
    let users = MockUserRepo::new(vec![user.clone()]);

    let out = CreateTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute(CreateTokenInput {
        email: user.email.clone(),
        password: "hunter2".into(),
    })
    .await
    .unwrap();

    let info = validate_access_token(&out.access_token, SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.access_token_exp, out.access_token_exp);
    validate_token(&out.refresh_token, SECRET).unwrap();
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let user = test_user("hunter2");
    let users = MockUserRepo::new(vec![user.clone()]);

    let err = CreateTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute(CreateTokenInput {
        email: user.email.clone(),
        password: "not hunter2".into(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AuthServiceError::InvalidCredential));
}

#[tokio::test]
async fn should_collapse_unknown_email_into_invalid_credential() {
    let users = MockUserRepo::empty();

    let err = CreateTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute(CreateTokenInput {
        email: "nobody@x.com".into(),
        password: "hunter2".into(),
    })
    .await
    .unwrap_err();

    // Same error as a wrong password, so login never confirms that an
    // address is registered.
    assert!(matches!(err, AuthServiceError::InvalidCredential));
}

#[tokio::test]
async fn should_reissue_both_tokens_on_refresh() {
    let user = test_user("hunter2");
    let users = MockUserRepo::new(vec![user.clone()]);

    let login = CreateTokenUseCase {
        users: users.clone(),
        jwt_secret: SECRET.into(),
    }
    .execute(CreateTokenInput {
        email: user.email.clone(),
        password: "hunter2".into(),
    })
    .await
    .unwrap();

    let refreshed = RefreshTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute(&login.refresh_token)
    .await
    .unwrap();

    assert_eq!(refreshed.user_id, user.id);
    let info = validate_access_token(&refreshed.access_token, SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    validate_token(&refreshed.refresh_token, SECRET).unwrap();
}

#[tokio::test]
async fn should_reject_refresh_with_a_garbage_token() {
    let users = MockUserRepo::empty();

    let err = RefreshTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute("not-a-jwt")
    .await
    .unwrap_err();

    assert!(matches!(err, AuthServiceError::InvalidRefreshToken));
}

#[tokio::test]
async fn should_reject_refresh_for_a_deleted_user() {
    let user = test_user("hunter2");
    let users = MockUserRepo::new(vec![user.clone()]);

    let login = CreateTokenUseCase {
        users: users.clone(),
        jwt_secret: SECRET.into(),
    }
    .execute(CreateTokenInput {
        email: user.email.clone(),
        password: "hunter2".into(),
    })
    .await
    .unwrap();

    users.users_handle().lock().unwrap().clear();

    let err = RefreshTokenUseCase {
        users,
        jwt_secret: SECRET.into(),
    }
    .execute(&login.refresh_token)
    .await
    .unwrap_err();

    assert!(matches!(err, AuthServiceError::InvalidRefreshToken));
}
