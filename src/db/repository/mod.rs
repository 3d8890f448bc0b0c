//! Repository Module
//!
//! CRUD operations over the access-control tables. Errors are local and
//! typed; nothing here retries or panics. Concurrent writers are kept safe
//! by the schema's uniqueness constraints (`roles.name`, `user_groups.slug`,
//! `(user_id, group_id)`), not by application locks: a unique-constraint
//! violation surfaces as [`RepoError::Conflict`].

pub mod group;
pub mod member;
pub mod role;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Protected: {0}")]
    Protected(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Conflict(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
