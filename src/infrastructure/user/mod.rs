//! User infrastructure module
//!
//! This module provides implementations for user registration,
//! including the in-memory repository, the request validator, and the user service.

mod repository;
mod service;
mod validator;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
pub use validator::UserValidator;
