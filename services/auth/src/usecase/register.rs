use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::AuthUser;
use crate::error::AuthServiceError;
use crate::usecase::password;

pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<AuthUser, AuthServiceError> {
        if self
            .users
            .exists_by_username_or_email(&input.username, &input.email)
            .await?
        {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let user = AuthUser {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            password_hash: password::hash_password(&input.password)?,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}
