//! User data access
//!
//! The user listing path treats persistence as an external capability: an
//! object-safe `UserRepository` trait with a single "find all" operation.
//! The logging server wires in an in-memory implementation seeded with
//! sample records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Display name of the user
    pub name: String,
    /// Contact email address
    pub email: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user record with a fresh ID and the current timestamp
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Errors raised by a user repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to stored user records
///
/// Implementations own record identity and ordering; callers pass the
/// returned list through unmodified.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user, in storage order
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}

/// In-memory repository backing the logging server and tests
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given records
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Create a repository seeded with a handful of sample users
    pub fn with_sample_users() -> Self {
        Self::with_users(vec![
            User::new("Ada Lovelace", "ada@example.com"),
            User::new("Grace Hopper", "grace@example.com"),
            User::new("Alan Turing", "alan@example.com"),
        ])
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.clone())
    }
}
