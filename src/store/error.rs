//! Store error definitions.

use thiserror::Error;

/// Errors produced by catalog, review and user operations.
///
/// The display strings are the exact bodies returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Book not found")]
    BookNotFound,

    #[error("Books by this author not found")]
    AuthorNotFound,

    #[error("Books with this title not found")]
    TitleNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("User already exists")]
    UserExists,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Coarse classification used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidCredentials,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::BookNotFound
            | StoreError::AuthorNotFound
            | StoreError::TitleNotFound
            | StoreError::UserNotFound
            | StoreError::ReviewNotFound => ErrorKind::NotFound,
            StoreError::UserExists => ErrorKind::Conflict,
            StoreError::InvalidCredentials => ErrorKind::InvalidCredentials,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
