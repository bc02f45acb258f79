//! Remote books API passthrough.
//!
//! # Data Flow
//! ```text
//! /external-books handler
//!     → BooksQuery (all / isbn / author / title)
//!     → client.rs (single GET, configured timeout)
//!     → body bytes on 2xx, UpstreamError otherwise
//! ```

pub mod client;
pub mod types;

pub use client::BooksApiClient;
pub use types::{BooksQuery, UpstreamError, UpstreamResult};
