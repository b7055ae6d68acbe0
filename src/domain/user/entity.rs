//! User entity and registration request

use serde::{Deserialize, Serialize};

/// Unvalidated registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Requested login, unique once registered
    pub login: String,
    pub full_name: String,
    /// Raw password, checked against the password policy
    pub password: String,
}

impl NewUser {
    pub fn new(
        login: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            full_name: full_name.into(),
            password: password.into(),
        }
    }
}

/// Registered user, keyed by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    login: String,
    full_name: String,
    /// Never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    pub fn new(
        login: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            full_name: full_name.into(),
            password: password.into(),
        }
    }

    // Getters

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            login: new_user.login,
            full_name: new_user.full_name,
            password: new_user.password,
        }
    }
}
