//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request id, tracing, timeout, metrics)
//! - Own the shared Bookstore and books API client
//! - Serve on a listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{
    make_request_span, propagate_request_id_layer, set_request_id_layer, track_metrics,
};
use crate::http::{books, external, users};
use crate::lifecycle::wait_for_shutdown;
use crate::store::Bookstore;
use crate::upstream::{BooksApiClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Bookstore>,
    pub books_api: BooksApiClient,
}

/// HTTP server for the bookstore service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<Bookstore>,
}

impl HttpServer {
    /// Create a server over the seed catalog and users.
    pub fn new(config: ServiceConfig) -> UpstreamResult<Self> {
        Self::with_store(config, Arc::new(Bookstore::seeded()))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<Bookstore>) -> UpstreamResult<Self> {
        let books_api = BooksApiClient::new(&config.upstream)?;

        let state = AppState {
            store: store.clone(),
            books_api,
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            store,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/books", get(books::list_books))
            .route("/books/isbn/{isbn}", get(books::book_by_isbn))
            .route("/books/author/{author}", get(books::books_by_author))
            .route("/books/title/{title}", get(books::books_by_title))
            .route(
                "/books/{id}/reviews",
                get(books::get_reviews)
                    .post(books::upsert_review)
                    .delete(books::delete_review),
            )
            .route("/users/register", post(users::register))
            .route("/users/login", post(users::login))
            .route("/external-books", get(external::all_books))
            .route("/external-books/isbn/{isbn}", get(external::book_by_isbn))
            .route("/external-books/author/{author}", get(external::books_by_author))
            .route("/external-books/title/{title}", get(external::books_by_title))
            .route("/health", get(health))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires or the process is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared store behind the handlers.
    pub fn store(&self) -> Arc<Bookstore> {
        self.store.clone()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
