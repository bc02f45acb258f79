//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bookstore::config::ServiceConfig;
use bookstore::{Bookstore, HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A running bookstore server bound to an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<Bookstore>,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with the given books API base URL.
#[allow(dead_code)]
pub async fn start_bookstore(upstream_base: &str) -> TestServer {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = upstream_base.to_string();
    config.upstream.timeout_secs = 2;

    let server = HttpServer::new(config).unwrap();
    let store = server.store();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}

/// Start the service pointing at an upstream that nothing listens on.
#[allow(dead_code)]
pub async fn start_bookstore_offline() -> TestServer {
    let addr = unused_addr().await;
    start_bookstore(&format!("http://{}", addr)).await
}

/// An address that refuses connections.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Request targets ("/books?author=x") seen by a mock upstream.
#[allow(dead_code)]
pub type SeenTargets = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock books API on an ephemeral port.
///
/// `f` maps the request target to a status code and body.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, SeenTargets)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: SeenTargets = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let seen_by_task = seen.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let seen = seen_by_task.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).to_string();
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("")
                    .to_string();
                seen.lock().unwrap().push(target.clone());

                let (status, body) = f(target).await;
                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    502 => "502 Bad Gateway",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };

                let response_str = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response_str.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    (addr, seen)
}

/// Non-pooled client so each test request opens a fresh connection.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
