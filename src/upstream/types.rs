//! Remote books API query and error types.

use thiserror::Error;

/// One of the read-only queries forwarded to the remote books API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooksQuery {
    /// `GET {base}/books`
    All,
    /// `GET {base}/books/{isbn}`
    Isbn(String),
    /// `GET {base}/books?author={author}`
    Author(String),
    /// `GET {base}/books?title={title}`
    Title(String),
}

impl BooksQuery {
    /// Label used in logs and metrics.
    pub fn operation(&self) -> &'static str {
        match self {
            BooksQuery::All => "all",
            BooksQuery::Isbn(_) => "isbn",
            BooksQuery::Author(_) => "author",
            BooksQuery::Title(_) => "title",
        }
    }

    /// Client-facing body returned when this query fails for any reason.
    pub fn failure_message(&self) -> &'static str {
        match self {
            BooksQuery::All => "Error fetching books",
            BooksQuery::Isbn(_) => "Error fetching book",
            BooksQuery::Author(_) => "Error fetching books by author",
            BooksQuery::Title(_) => "Error fetching books by title",
        }
    }
}

/// Errors from the remote books API client.
///
/// Kept distinct for logging; callers collapse every variant into a single
/// failure response.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Base URL missing, unparseable, or not http(s).
    #[error("Invalid upstream URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure.
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(u16),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
