//! In-memory bookstore state.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → bookstore.rs (Bookstore: owns both collections behind RwLocks)
//!     → catalog.rs (ordered books + embedded reviews)
//!     → users.rs (registered users, plaintext credentials)
//!     → error.rs (StoreError mapped to HTTP status at the boundary)
//! ```
//!
//! # Design Decisions
//! - Each collection has its own lock; no operation holds both at once
//! - Lookups are linear scans over seed-sized vectors
//! - Reviews are owned by their book and keyed by username

pub mod bookstore;
pub mod catalog;
pub mod error;
pub mod types;
pub mod users;

pub use bookstore::Bookstore;
pub use catalog::Catalog;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use types::{Book, Review, User, SEED_REVIEWERS};
pub use users::UserStore;
