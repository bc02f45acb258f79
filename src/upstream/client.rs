//! HTTP client for the remote books API.
//!
//! # Responsibilities
//! - Build request URLs for the four supported queries
//! - Issue a single GET per query with the configured timeout
//! - Hand back the response body untouched on 2xx
//!
//! # Design Decisions
//! - No retries or backoff: one attempt, fail fast
//! - Path segments and query values are percent-encoded by `url`

use std::time::Duration;

use axum::body::Bytes;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{BooksQuery, UpstreamError, UpstreamResult};

/// Client for the remote books API.
#[derive(Debug, Clone)]
pub struct BooksApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BooksApiClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(UpstreamError::Client)?;

        tracing::debug!(base_url = %base_url, timeout_secs = config.timeout_secs, "Books API client initialized");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for a query.
    pub fn url_for(&self, query: &BooksQuery) -> Url {
        let mut url = self.base_url.clone();
        // `parse_base_url` rejects URLs that cannot carry a path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("books");
            if let BooksQuery::Isbn(isbn) = query {
                segments.push(isbn);
            }
        }
        match query {
            BooksQuery::Author(author) => {
                url.query_pairs_mut().append_pair("author", author);
            }
            BooksQuery::Title(title) => {
                url.query_pairs_mut().append_pair("title", title);
            }
            BooksQuery::All | BooksQuery::Isbn(_) => {}
        }
        url
    }

    /// Run a query and return the upstream body verbatim.
    pub async fn fetch(&self, query: &BooksQuery) -> UpstreamResult<Bytes> {
        let url = self.url_for(query);
        tracing::debug!(operation = query.operation(), url = %url, "Forwarding to books API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?)
    }
}

/// Parse and check a base URL for the books API.
pub fn parse_base_url(raw: &str) -> UpstreamResult<Url> {
    let url = Url::parse(raw).map_err(|e| UpstreamError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UpstreamError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(UpstreamError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL cannot carry a path".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BooksApiClient {
        BooksApiClient::new(&UpstreamConfig {
            base_url: base.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_urls_for_default_base() {
        let c = client("https://api.example.com");
        assert_eq!(c.url_for(&BooksQuery::All).as_str(), "https://api.example.com/books");
        assert_eq!(
            c.url_for(&BooksQuery::Isbn("9780451524935".into())).as_str(),
            "https://api.example.com/books/9780451524935"
        );
        assert_eq!(
            c.url_for(&BooksQuery::Author("Harper Lee".into())).as_str(),
            "https://api.example.com/books?author=Harper+Lee"
        );
        assert_eq!(
            c.url_for(&BooksQuery::Title("1984".into())).as_str(),
            "https://api.example.com/books?title=1984"
        );
    }

    #[test]
    fn test_urls_keep_base_path() {
        let c = client("http://localhost:4000/v2/");
        assert_eq!(c.url_for(&BooksQuery::All).as_str(), "http://localhost:4000/v2/books");

        let c = client("http://localhost:4000/v2");
        assert_eq!(
            c.url_for(&BooksQuery::Isbn("a/b".into())).as_str(),
            "http://localhost:4000/v2/books/a%2Fb"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(UpstreamError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("not a url"),
            Err(UpstreamError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("mailto:books@example.com"),
            Err(UpstreamError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let c = client(&format!("http://{}", addr));
        let err = c.fetch(&BooksQuery::All).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request(_)));
    }
}
