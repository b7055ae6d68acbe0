//! Registration request validator

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{NewUser, PasswordPolicy, UserError, UserRepository};

/// Checks a registration request before anything is stored
///
/// The login uniqueness check runs first, so a taken login is reported
/// even when the password is also invalid.
#[derive(Debug)]
pub struct UserValidator<R: UserRepository> {
    repository: Arc<R>,
    policy: PasswordPolicy,
}

impl<R: UserRepository> UserValidator<R> {
    pub fn new(repository: Arc<R>, policy: PasswordPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn validate_new_user(&self, new_user: &NewUser) -> Result<(), UserError> {
        if self.repository.login_exists(&new_user.login).await? {
            debug!(login = %new_user.login, "Rejected registration, login taken");
            return Err(UserError::login_exists(&new_user.login));
        }

        let violations = self.policy.check(&new_user.password);

        if !violations.is_empty() {
            debug!(
                login = %new_user.login,
                violations = violations.len(),
                "Rejected registration, password constraints"
            );
            return Err(UserError::constraint_violation(violations));
        }

        Ok(())
    }
}
