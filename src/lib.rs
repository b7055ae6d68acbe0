//! User Registry
//!
//! Validated registration and lookup of users keyed by login:
//! - Duplicate login detection
//! - Configurable password length bounds and pattern
//! - In-memory storage behind an async repository trait

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::info;

use crate::config::PasswordPolicyConfig;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, UserService};

/// Build a user service over a fresh in-memory repository
pub fn create_user_service(
    password: &PasswordPolicyConfig,
) -> Result<UserService<InMemoryUserRepository>, DomainError> {
    let policy = password.to_policy()?;
    info!(
        min_length = policy.min_length(),
        max_length = policy.max_length(),
        pattern = %policy.pattern(),
        "Password policy in effect"
    );

    let repository = Arc::new(InMemoryUserRepository::new());

    Ok(UserService::new(repository, policy))
}
