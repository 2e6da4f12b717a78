//! User listing service
//!
//! A thin pass-through between the HTTP handlers and the data-access
//! capability: logs intent and forwards the repository's result unmodified.

use crate::error::AppError;
use crate::repository::{User, UserRepository};
use std::sync::Arc;
use tracing::info;

/// User listing service holding the data-access capability
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service backed by the given repository
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Return every stored user, exactly as the repository yields them
    ///
    /// No filtering, paging, or sorting is applied; repository failures
    /// propagate to the caller untranslated.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        info!("Getting all user information from the repository");
        Ok(self.repository.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, RepositoryError};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Err(RepositoryError::Unavailable(
                "connection refused".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_get_all_users_returns_repository_list_verbatim() {
        let users = vec![
            User::new("Ada Lovelace", "ada@example.com"),
            User::new("Grace Hopper", "grace@example.com"),
        ];
        let service = UserService::new(Arc::new(InMemoryUserRepository::with_users(
            users.clone(),
        )));

        let listed = service
            .get_all_users()
            .await
            .expect("listing should succeed");
        assert_eq!(listed, users);
    }

    #[tokio::test]
    async fn test_get_all_users_empty() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let listed = service
            .get_all_users()
            .await
            .expect("listing should succeed");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_users_propagates_repository_failure() {
        let service = UserService::new(Arc::new(FailingRepository));
        let result = service.get_all_users().await;
        assert!(result.is_err(), "repository failure should propagate");
        match result.unwrap_err() {
            AppError::Repository(_) => {
                // Expected error
            }
            other => {
                panic!("Expected Repository error, got: {:?}", other);
            }
        }
    }
}
