//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::User;
use super::error::UserError;

/// Repository trait for user storage, keyed by login
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if a login is already registered
    async fn login_exists(&self, login: &str) -> Result<bool, UserError>;

    /// Get a user by login, failing with `UserError::NotFound` when absent
    async fn get_by_login(&self, login: &str) -> Result<User, UserError>;

    /// Store a new user
    ///
    /// Fails with `UserError::LoginExists` when the login is already stored;
    /// the check and the insert happen as one step.
    async fn save(&self, user: User) -> Result<User, UserError>;

    /// List all users ordered by login
    async fn list(&self) -> Result<Vec<User>, UserError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, UserError>;
}
