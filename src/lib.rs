//! Bookstore catalog and review service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod upstream;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Bookstore;
