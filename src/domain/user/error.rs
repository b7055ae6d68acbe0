//! User-specific errors

use thiserror::Error;

use super::validation::UserValidationError;
use crate::domain::DomainError;

/// Errors raised while registering or looking up users
#[derive(Debug, Error)]
pub enum UserError {
    /// The request broke one or more field constraints
    #[error("You have errors in you object")]
    ConstraintViolation(Vec<UserValidationError>),

    #[error("Login {0} already taken")]
    LoginExists(String),

    #[error("User with login {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl UserError {
    pub fn constraint_violation(violations: Vec<UserValidationError>) -> Self {
        Self::ConstraintViolation(violations)
    }

    pub fn login_exists(login: impl Into<String>) -> Self {
        Self::LoginExists(login.into())
    }

    pub fn not_found(login: impl Into<String>) -> Self {
        Self::NotFound(login.into())
    }

    /// Individual violations, empty for every other kind
    pub fn violations(&self) -> &[UserValidationError] {
        match self {
            Self::ConstraintViolation(violations) => violations,
            _ => &[],
        }
    }
}
