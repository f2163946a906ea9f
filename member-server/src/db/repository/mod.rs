//! Repository Module
//!
//! Storage adapters. No business rules live here: every storage failure
//! surfaces as [`RepoError::Database`].

pub mod member;

pub use member::SqliteMemberRepository;

use async_trait::async_trait;
use shared::models::{Member, NewMember};
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage contract for the member collection
///
/// `update` and `delete` are single conditional statements; their boolean
/// result reports whether a row with that id existed at write time.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// All members, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Presence check without loading the row
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Insert a row and return the id storage assigned to it
    async fn create(&self, data: &NewMember) -> RepoResult<i64>;

    /// Overwrite every mutable column of the row `member.id`
    async fn update(&self, member: &Member) -> RepoResult<bool>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
