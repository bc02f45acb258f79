//! The bookstore service object shared by all request handlers.

use std::sync::RwLock;

use crate::store::catalog::Catalog;
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Book, Review};
use crate::store::users::UserStore;

/// Owns the catalog and the user store.
///
/// Constructed once at startup and shared via `Arc`. Every method takes at
/// most one lock at a time and returns owned data, so no guard outlives the
/// call.
#[derive(Debug, Default)]
pub struct Bookstore {
    catalog: RwLock<Catalog>,
    users: RwLock<UserStore>,
}

impl Bookstore {
    pub fn new(catalog: Catalog, users: UserStore) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            users: RwLock::new(users),
        }
    }

    /// Bookstore holding the seed catalog and seed users.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), UserStore::seeded())
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.catalog
            .read()
            .expect("catalog lock poisoned")
            .list()
            .to_vec()
    }

    pub fn book_by_isbn(&self, isbn: &str) -> StoreResult<Book> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog.by_isbn(isbn).cloned()
    }

    pub fn books_by_author(&self, author: &str) -> StoreResult<Vec<Book>> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog
            .by_author(author)
            .map(|books| books.into_iter().cloned().collect())
    }

    pub fn books_by_title(&self, fragment: &str) -> StoreResult<Vec<Book>> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog
            .by_title(fragment)
            .map(|books| books.into_iter().cloned().collect())
    }

    pub fn reviews(&self, book_id: u32) -> StoreResult<Vec<Review>> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog.reviews(book_id).map(<[Review]>::to_vec)
    }

    /// Add or replace `username`'s review on a book.
    ///
    /// A missing book is reported before an unregistered user. The username
    /// is trusted as supplied; no credential is checked.
    pub fn upsert_review(&self, book_id: u32, username: &str, text: &str) -> StoreResult<Vec<Review>> {
        // Users are never removed, so a positive answer stays valid after the
        // user lock is released.
        let registered = self.is_registered(username);

        let mut catalog = self.catalog.write().expect("catalog lock poisoned");
        catalog.by_id(book_id)?;
        if !registered {
            return Err(StoreError::UserNotFound);
        }
        catalog
            .upsert_review(book_id, username, text)
            .map(<[Review]>::to_vec)
    }

    /// Remove `username`'s review from a book. Any caller may remove any review.
    pub fn delete_review(&self, book_id: u32, username: &str) -> StoreResult<Vec<Review>> {
        let mut catalog = self.catalog.write().expect("catalog lock poisoned");
        catalog
            .delete_review(book_id, username)
            .map(<[Review]>::to_vec)
    }

    pub fn register(&self, username: &str, password: &str) -> StoreResult<()> {
        let mut users = self.users.write().expect("user store lock poisoned");
        users.register(username, password).map(|_| ())
    }

    /// Returns the stored username on an exact credential match.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<String> {
        let users = self.users.read().expect("user store lock poisoned");
        users
            .login(username, password)
            .map(|user| user.username.clone())
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.users
            .read()
            .expect("user store lock poisoned")
            .contains(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.read().expect("user store lock poisoned").len()
    }
}
