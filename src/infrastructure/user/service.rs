//! User service for registration and lookup

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{NewUser, PasswordPolicy, User, UserError, UserRepository};

use super::validator::UserValidator;

/// User service orchestrating validation and persistence
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    validator: UserValidator<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, policy: PasswordPolicy) -> Self {
        let validator = UserValidator::new(Arc::clone(&repository), policy);
        Self {
            repository,
            validator,
        }
    }

    /// Register a new user
    ///
    /// Validation errors are returned as-is and nothing is stored.
    pub async fn create_new_user(&self, new_user: NewUser) -> Result<User, UserError> {
        info!(login = %new_user.login, "Creating user");

        self.validator.validate_new_user(&new_user).await?;

        let user = self.repository.save(User::from(new_user)).await?;
        debug!(login = %user.login(), "User created");

        Ok(user)
    }

    /// Get a user by login
    pub async fn get_user_by_login(&self, login: &str) -> Result<User, UserError> {
        self.repository.get_by_login(login).await
    }

    /// List all users ordered by login
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count_users(&self) -> Result<usize, UserError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::repository::InMemoryUserRepository;
    use async_trait::async_trait;

    /// Repository that yields after the uniqueness check, letting a
    /// concurrent registration run between the check and the insert
    struct YieldingRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for YieldingRepository {
        async fn login_exists(&self, login: &str) -> Result<bool, UserError> {
            let exists = self.inner.login_exists(login).await?;
            tokio::task::yield_now().await;
            Ok(exists)
        }

        async fn get_by_login(&self, login: &str) -> Result<User, UserError> {
            self.inner.get_by_login(login).await
        }

        async fn save(&self, user: User) -> Result<User, UserError> {
            self.inner.save(user).await
        }

        async fn list(&self) -> Result<Vec<User>, UserError> {
            self.inner.list().await
        }

        async fn count(&self) -> Result<usize, UserError> {
            self.inner.count().await
        }
    }

    fn create_service() -> (Arc<InMemoryUserRepository>, UserService<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(
            Arc::clone(&repository),
            PasswordPolicy::standard().unwrap(),
        );
        (repository, service)
    }

    #[tokio::test]
    async fn test_create_user() {
        let (repository, service) = create_service();

        let user = service
            .create_new_user(NewUser::new("created", "fullName", "pass"))
            .await
            .unwrap();

        let expected = User::new("created", "fullName", "pass");
        assert_eq!(user, expected);
        assert_eq!(repository.get_by_login("created").await.unwrap(), expected);
        assert_eq!(service.get_user_by_login("created").await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_create_user_invalid_password() {
        let (repository, service) = create_service();

        let result = service
            .create_new_user(NewUser::new("notCreated", "fullName", "pa"))
            .await;
        assert!(matches!(result, Err(UserError::ConstraintViolation(_))));

        let lookup = repository.get_by_login("notCreated").await;
        assert!(matches!(lookup, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_login() {
        let (_, service) = create_service();

        service
            .create_new_user(NewUser::new("jdoe", "John Doe", "pass"))
            .await
            .unwrap();

        let err = service
            .create_new_user(NewUser::new("jdoe", "Jane Doe", "word"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Login jdoe already taken");

        // First registration is kept
        let user = service.get_user_by_login("jdoe").await.unwrap();
        assert_eq!(user.full_name(), "John Doe");
    }

    #[tokio::test]
    async fn test_concurrent_registration_of_same_login() {
        let repository = Arc::new(YieldingRepository {
            inner: InMemoryUserRepository::new(),
        });
        let service = UserService::new(repository, PasswordPolicy::standard().unwrap());

        let (first, second) = tokio::join!(
            service.create_new_user(NewUser::new("dup", "First", "pass")),
            service.create_new_user(NewUser::new("dup", "Second", "word")),
        );

        let (winner, loser) = match (first, second) {
            (Ok(user), Err(err)) | (Err(err), Ok(user)) => (user, err),
            other => panic!("expected exactly one registration to succeed, got {other:?}"),
        };

        assert!(matches!(loser, UserError::LoginExists(login) if login == "dup"));
        assert_eq!(service.count_users().await.unwrap(), 1);

        let stored = service.get_user_by_login("dup").await.unwrap();
        assert_eq!(stored.full_name(), winner.full_name());
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let (_, service) = create_service();

        let result = service.get_user_by_login("ghost").await;
        assert!(matches!(result, Err(UserError::NotFound(login)) if login == "ghost"));
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let (_, service) = create_service();

        service
            .create_new_user(NewUser::new("user2", "Second", "pass"))
            .await
            .unwrap();
        service
            .create_new_user(NewUser::new("user1", "First", "pass"))
            .await
            .unwrap();
        let rejected = service
            .create_new_user(NewUser::new("user3", "Third", "p"))
            .await;
        assert!(matches!(rejected, Err(UserError::ConstraintViolation(_))));

        let all = service.list_users().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].login(), "user1");

        assert_eq!(service.count_users().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_validator_uses_configured_policy() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let policy = PasswordPolicy::new(8, 64, "^.+$").unwrap();
        let service = UserService::new(repository, policy);

        let result = service
            .create_new_user(NewUser::new("jdoe", "John Doe", "pass"))
            .await;
        assert!(matches!(result, Err(UserError::ConstraintViolation(_))));

        let user = service
            .create_new_user(NewUser::new("jdoe", "John Doe", "*long pAssword"))
            .await
            .unwrap();
        assert_eq!(user.password(), "*long pAssword");
    }
}
