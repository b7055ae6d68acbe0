//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::user::{User, UserError, UserRepository};

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    /// Users keyed by login
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users_map = users
            .into_iter()
            .map(|user| (user.login().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn login_exists(&self, login: &str) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.contains_key(login))
    }

    async fn get_by_login(&self, login: &str) -> Result<User, UserError> {
        let users = self.users.read().await;
        users
            .get(login)
            .cloned()
            .ok_or_else(|| UserError::not_found(login))
    }

    async fn save(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        match users.entry(user.login().to_string()) {
            Entry::Occupied(_) => {
                debug!(login = %user.login(), "Refused to replace existing user record");
                Err(UserError::login_exists(user.login()))
            }
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.login().cmp(b.login()));

        Ok(result)
    }

    async fn count(&self) -> Result<usize, UserError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
