//! Catalog and user record types.

use serde::{Deserialize, Serialize};

/// A single user's review of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Username the review was filed under. Not checked against the user store
    /// after creation.
    pub username: String,
    /// Review text.
    pub review: String,
}

impl Review {
    pub fn new(username: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            review: review.into(),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique numeric identifier.
    pub id: u32,
    pub title: String,
    pub author: String,
    /// Unique ISBN-13, stored without dashes.
    pub isbn: String,
    /// At most one review per username, in insertion order.
    pub reviews: Vec<Review>,
}

impl Book {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            reviews: Vec::new(),
        }
    }

    /// Append a review at construction time.
    pub fn with_review(mut self, username: &str, review: &str) -> Self {
        self.reviews.push(Review::new(username, review));
        self
    }

    /// Position of `username`'s review, if any.
    pub fn review_position(&self, username: &str) -> Option<usize> {
        self.reviews.iter().position(|r| r.username == username)
    }
}

/// A registered user.
///
/// The password is kept and compared in plaintext; this record must never be
/// serialized back to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub(crate) password: String,
    /// Never populated; book-side reviews are authoritative.
    pub reviews: Vec<Review>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            reviews: Vec::new(),
        }
    }

    /// Exact, case-sensitive credential check.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Placeholder authors of the seed reviews. Neither is a registered user.
pub const SEED_REVIEWERS: [&str; 2] = ["reader_1", "reader_2"];

/// Books present at process start, each with its seed reviews.
pub fn seed_books() -> Vec<Book> {
    let [first, second] = SEED_REVIEWERS;
    vec![
        Book::new(1, "The Great Gatsby", "F. Scott Fitzgerald", "9780743273565")
            .with_review(first, "good")
            .with_review(second, "nice"),
        Book::new(2, "To Kill a Mockingbird", "Harper Lee", "9780061120084")
            .with_review(first, "nice"),
        Book::new(3, "1984", "George Orwell", "9780451524935").with_review(first, "good"),
    ]
}

/// Users present at process start.
pub fn seed_users() -> Vec<User> {
    vec![User::new("john_doe", "password123")]
}
