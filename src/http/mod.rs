//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request id, span, metrics)
//!     → books.rs / users.rs (local store operations)
//!     → external.rs (books API passthrough)
//!     → response.rs (error → status + text, JSON bodies)
//!     → Send to client
//! ```

pub mod books;
pub mod external;
pub mod request;
pub mod response;
pub mod server;
pub mod users;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, ApiResult};
pub use server::{AppState, HttpServer};
