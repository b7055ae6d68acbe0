//! Password policy and field validation

use regex::Regex;
use thiserror::Error;

use crate::domain::DomainError;

/// A single broken field constraint
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("Password does not match required pattern '{0}'")]
    PasswordPatternMismatch(String),
}

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 3;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 7;
pub const DEFAULT_PASSWORD_PATTERN: &str = "^[a-zA-Z0-9]+$";

/// Password rules applied to every registration request
///
/// Length is inclusive on both ends and counted in characters, not bytes.
/// The pattern must match the whole password.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    /// Pattern as configured
    source: String,
    /// Anchored form of `source`
    pattern: Regex,
}

impl PasswordPolicy {
    /// Build a policy, rejecting inverted bounds and patterns that do not compile
    pub fn new(min_length: usize, max_length: usize, pattern: &str) -> Result<Self, DomainError> {
        if min_length > max_length {
            return Err(DomainError::configuration(format!(
                "Password min_length ({}) exceeds max_length ({})",
                min_length, max_length
            )));
        }

        let anchored = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            DomainError::configuration(format!("Invalid password pattern '{}': {}", pattern, e))
        })?;

        Ok(Self {
            min_length,
            max_length,
            source: pattern.to_string(),
            pattern: anchored,
        })
    }

    /// Policy with the stock bounds and pattern
    pub fn standard() -> Result<Self, DomainError> {
        Self::new(
            DEFAULT_MIN_PASSWORD_LENGTH,
            DEFAULT_MAX_PASSWORD_LENGTH,
            DEFAULT_PASSWORD_PATTERN,
        )
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Collect every rule the password breaks
    ///
    /// Returns an empty list when the password is acceptable. Length uses
    /// `chars().count()` so multi-byte characters count once.
    pub fn check(&self, password: &str) -> Vec<UserValidationError> {
        let mut violations = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            violations.push(UserValidationError::PasswordTooShort(self.min_length));
        }

        if length > self.max_length {
            violations.push(UserValidationError::PasswordTooLong(self.max_length));
        }

        if !self.pattern.is_match(password) {
            violations.push(UserValidationError::PasswordPatternMismatch(
                self.source.clone(),
            ));
        }

        violations
    }
}
