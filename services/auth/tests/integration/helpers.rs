use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use budgetflow_auth::domain::repository::{Mailer, ResetCodeStore, UserRepository};
use budgetflow_auth::domain::types::{AuthUser, ResetCode};
use budgetflow_auth::error::AuthServiceError;
use budgetflow_auth::usecase::password;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<AuthUser>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<AuthUser>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<AuthUser>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username || u.email == email))
    }

    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn set_password_hash(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == user_id) {
            u.password_hash = password_hash.to_owned();
        }
        Ok(())
    }
}

// ── MockResetCodeStore ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockResetCodeStore {
    pub codes: Arc<Mutex<HashMap<Uuid, ResetCode>>>,
}

impl MockResetCodeStore {
    pub fn empty() -> Self {
        Self {
            codes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Shared handle to the stored codes for inspection and seeding.
    pub fn codes_handle(&self) -> Arc<Mutex<HashMap<Uuid, ResetCode>>> {
        Arc::clone(&self.codes)
    }
}

impl ResetCodeStore for MockResetCodeStore {
    async fn put(&self, code: &ResetCode) -> Result<(), AuthServiceError> {
        // One slot per user: a new code supersedes the old one.
        self.codes
            .lock()
            .unwrap()
            .insert(code.user_id, code.clone());
        Ok(())
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<ResetCode>, AuthServiceError> {
        Ok(self.codes.lock().unwrap().get(&user_id).cloned())
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), AuthServiceError> {
        self.codes.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    /// A mailer whose every send fails, for delivery-failure tests.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(AuthServiceError::Internal(anyhow::anyhow!("smtp down")));
        }
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(plaintext_password: &str) -> AuthUser {
    AuthUser {
        id: Uuid::now_v7(),
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        password_hash: password::hash_password(plaintext_password).unwrap(),
        created_at: Utc::now(),
    }
}
