// src/auth/repository.rs
// User storage seam plus the in-memory store used by the server

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::error::{AuthError, AuthResult};
use super::models::UserRecord;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserRecord>>;

    async fn find_by_id(&self, id: &str) -> AuthResult<Option<UserRecord>>;

    /// Store a new account. Emails are unique, case-insensitively.
    async fn insert(&self, user: UserRecord) -> AuthResult<()>;
}

/// Accounts keyed by id, lost on restart
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserRecord>> {
        let users = self.users.read();
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AuthResult<Option<UserRecord>> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn insert(&self, user: UserRecord) -> AuthResult<()> {
        let mut users = self.users.write();
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AuthError::AlreadyExists);
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }
}
