//! Book catalog queries and review mutation.
//!
//! # Responsibilities
//! - Look up books by id, ISBN, author and title fragment
//! - Upsert and delete the per-user review on a book
//!
//! # Design Decisions
//! - Author match is full-string and case-insensitive
//! - Title match is substring and case-insensitive
//! - Review order is insertion order; upsert edits in place

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{seed_books, Book, Review};

/// Ordered collection of books.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Catalog holding the fixed seed books.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// All books, in catalog order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn by_id(&self, id: u32) -> StoreResult<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(StoreError::BookNotFound)
    }

    fn by_id_mut(&mut self, id: u32) -> StoreResult<&mut Book> {
        self.books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::BookNotFound)
    }

    pub fn by_isbn(&self, isbn: &str) -> StoreResult<&Book> {
        self.books
            .iter()
            .find(|b| b.isbn == isbn)
            .ok_or(StoreError::BookNotFound)
    }

    pub fn by_author(&self, author: &str) -> StoreResult<Vec<&Book>> {
        let author = author.to_lowercase();
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| b.author.to_lowercase() == author)
            .collect();

        if found.is_empty() {
            return Err(StoreError::AuthorNotFound);
        }
        Ok(found)
    }

    pub fn by_title(&self, fragment: &str) -> StoreResult<Vec<&Book>> {
        let fragment = fragment.to_lowercase();
        let found: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&fragment))
            .collect();

        if found.is_empty() {
            return Err(StoreError::TitleNotFound);
        }
        Ok(found)
    }

    pub fn reviews(&self, book_id: u32) -> StoreResult<&[Review]> {
        self.by_id(book_id).map(|b| b.reviews.as_slice())
    }

    /// Replace `username`'s review text in place, or append a new review.
    ///
    /// Does not check that `username` is registered; callers do that.
    pub fn upsert_review(
        &mut self,
        book_id: u32,
        username: &str,
        text: &str,
    ) -> StoreResult<&[Review]> {
        let book = self.by_id_mut(book_id)?;
        match book.review_position(username) {
            Some(idx) => book.reviews[idx].review = text.to_string(),
            None => book.reviews.push(Review::new(username, text)),
        }
        Ok(book.reviews.as_slice())
    }

    /// Remove `username`'s review, keeping the others in order.
    pub fn delete_review(&mut self, book_id: u32, username: &str) -> StoreResult<&[Review]> {
        let book = self.by_id_mut(book_id)?;
        let idx = book
            .review_position(username)
            .ok_or(StoreError::ReviewNotFound)?;
        book.reviews.remove(idx);
        Ok(book.reviews.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_every_seed_isbn_resolves() {
        let catalog = Catalog::seeded();
        for book in catalog.list() {
            let found = catalog.by_isbn(&book.isbn).unwrap();
            assert_eq!(found.isbn, book.isbn);
            assert_eq!(catalog.list().iter().filter(|b| b.isbn == book.isbn).count(), 1);
        }
        assert_eq!(catalog.by_isbn("0000000000000"), Err(StoreError::BookNotFound));
    }

    #[test]
    fn test_author_match_ignores_case() {
        let catalog = Catalog::seeded();
        let lower = catalog.by_author("george orwell").unwrap();
        let proper = catalog.by_author("George Orwell").unwrap();
        assert_eq!(lower, proper);
        assert_eq!(titles(&lower), vec!["1984"]);
    }

    #[test]
    fn test_author_match_is_not_substring() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.by_author("Orwell"), Err(StoreError::AuthorNotFound));
    }

    #[test]
    fn test_title_substring() {
        let catalog = Catalog::seeded();
        assert_eq!(titles(&catalog.by_title("great").unwrap()), vec!["The Great Gatsby"]);
        assert_eq!(catalog.by_title("xyz"), Err(StoreError::TitleNotFound));
    }

    #[test]
    fn test_title_fragment_can_match_many() {
        let catalog = Catalog::seeded();
        assert_eq!(
            titles(&catalog.by_title("T").unwrap()),
            vec!["The Great Gatsby", "To Kill a Mockingbird"]
        );
    }

    #[test]
    fn test_reviews_unknown_book() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.reviews(99), Err(StoreError::BookNotFound));
        let texts: Vec<&str> = catalog.reviews(1).unwrap().iter().map(|r| r.review.as_str()).collect();
        assert_eq!(texts, vec!["good", "nice"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut catalog = Catalog::seeded();
        catalog.upsert_review(1, "alice", "first").unwrap();
        catalog.upsert_review(1, "john_doe", "meh").unwrap();
        let before = catalog.reviews(1).unwrap().len();

        let reviews = catalog.upsert_review(1, "alice", "second").unwrap();
        assert_eq!(reviews.len(), before);
        assert_eq!(reviews[before - 2], Review::new("alice", "second"));
        assert_eq!(reviews[before - 1], Review::new("john_doe", "meh"));
    }

    #[test]
    fn test_upsert_unknown_book() {
        let mut catalog = Catalog::seeded();
        assert_eq!(
            catalog.upsert_review(42, "alice", "text"),
            Err(StoreError::BookNotFound)
        );
    }

    #[test]
    fn test_delete_keeps_order_of_rest() {
        let mut catalog = Catalog::seeded();
        for name in ["a", "b", "c"] {
            catalog.upsert_review(2, name, name).unwrap();
        }

        let reviews = catalog.delete_review(2, "b").unwrap();
        let names: Vec<&str> = reviews.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["reader_1", "a", "c"]);
    }

    #[test]
    fn test_delete_missing_review() {
        let mut catalog = Catalog::seeded();
        catalog.upsert_review(3, "a", "x").unwrap();
        assert_eq!(catalog.delete_review(3, "nobody"), Err(StoreError::ReviewNotFound));
        assert_eq!(catalog.delete_review(9, "a"), Err(StoreError::BookNotFound));
        assert_eq!(catalog.reviews(3).unwrap().len(), 2);
    }
}
