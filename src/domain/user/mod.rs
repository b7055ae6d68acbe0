//! User domain
//!
//! This module provides domain types and traits for user registration,
//! including the user entity, password policy, errors, and the repository trait.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{NewUser, User};
pub use error::UserError;
pub use repository::UserRepository;
pub use validation::{
    PasswordPolicy, UserValidationError, DEFAULT_MAX_PASSWORD_LENGTH,
    DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_PASSWORD_PATTERN,
};

#[cfg(test)]
pub use repository::MockUserRepository;
