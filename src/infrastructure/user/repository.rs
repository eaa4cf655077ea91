//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Enforces email and display-name uniqueness on `create`. A registration
/// that loses a read-then-act race against a concurrent create surfaces here
/// as a `Conflict` error rather than a friendly duplicate message.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    /// Index for email -> user ID lookup
    email_index: Arc<RwLock<HashMap<String, UserId>>>,
    /// Index for display name -> user ID lookup
    display_name_index: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut email_map = HashMap::new();
        let mut display_name_map = HashMap::new();

        for user in users {
            let id = *user.id();
            email_map.insert(user.email().to_string(), id);
            display_name_map.insert(user.display_name().to_string(), id);
            users_map.insert(id, user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            email_index: Arc::new(RwLock::new(email_map)),
            display_name_index: Arc::new(RwLock::new(display_name_map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email_index = self.email_index.read().await;

        if let Some(user_id) = email_index.get(email) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, DomainError> {
        let display_name_index = self.display_name_index.read().await;

        if let Some(user_id) = display_name_index.get(display_name) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;
        let mut display_name_index = self.display_name_index.write().await;

        let id = *user.id();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if email_index.contains_key(user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                user.email()
            )));
        }

        if display_name_index.contains_key(user.display_name()) {
            return Err(DomainError::conflict(format!(
                "Display name '{}' already exists",
                user.display_name()
            )));
        }

        email_index.insert(user.email().to_string(), id);
        display_name_index.insert(user.display_name().to_string(), id);
        users.insert(id, user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::organisation::OrganisationId;
    use crate::domain::team::TeamId;

    fn create_test_user(email: &str, display_name: &str) -> User {
        User::new(
            UserId::generate(),
            email,
            display_name,
            "hashed_password",
            "random_salt",
            OrganisationId::generate(),
            TeamId::generate(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user@test.com", "name");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().email(), "user@test.com");
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user@test.com", "name");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.find_by_email("user@test.com").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id(), user.id());

        let not_found = repo.find_by_email("other@test.com").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_display_name() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user@test.com", "name");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.find_by_display_name("name").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id(), user.id());

        let not_found = repo.find_by_display_name("someName").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        let user1 = create_test_user("user@test.com", "name");
        let user2 = create_test_user("user@test.com", "name2");

        repo.create(user1).await.unwrap();

        let result = repo.create(user2).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_display_name() {
        let repo = InMemoryUserRepository::new();
        let user1 = create_test_user("user@test.com", "name");
        let user2 = create_test_user("user2@test.com", "name");

        repo.create(user1).await.unwrap();

        let result = repo.create(user2).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_exists_helpers() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("user@test.com", "name");

        repo.create(user).await.unwrap();

        assert!(repo.email_exists("user@test.com").await.unwrap());
        assert!(!repo.email_exists("other@test.com").await.unwrap());
        assert!(repo.display_name_exists("name").await.unwrap());
        assert!(!repo.display_name_exists("someName").await.unwrap());
    }

    #[tokio::test]
    async fn test_with_users() {
        let users = vec![
            create_test_user("user@test.com", "name"),
            create_test_user("user2@test.com", "name2"),
        ];

        let repo = InMemoryUserRepository::with_users(users);

        let user1 = repo.find_by_email("user@test.com").await.unwrap();
        assert!(user1.is_some());

        let user2 = repo.find_by_display_name("name2").await.unwrap();
        assert!(user2.is_some());
    }
}
