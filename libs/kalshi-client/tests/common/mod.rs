//! Common test utilities for kalshi-client integration tests

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// A minimal canned-response HTTP server. Serves the same status and body to
/// every connection and records each request's path.
pub struct MockHttpServer {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockHttpServer {
    /// Create and start a server answering with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let paths = Arc::new(Mutex::new(Vec::new()));

        let body = body.to_string();
        let shutdown_clone = shutdown.clone();
        let paths_clone = paths.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                let body = body.clone();
                                let paths = paths_clone.clone();
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, status, body, paths).await;
                                });
                            }
                            Err(e) => {
                                eprintln!("Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_clone.notified() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            shutdown,
            paths,
        }
    }

    async fn handle_connection(
        mut stream: TcpStream,
        status: u16,
        body: String,
        paths: Arc<Mutex<Vec<String>>>,
    ) {
        // Read until the end of the request headers.
        let mut request = Vec::new();
        let mut buf = vec![0u8; 4096];
        loop {
            let n = match stream.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(_) => return,
            };
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        // Record the request target from "GET <path> HTTP/1.1".
        if let Some(line) = request.split(|&b| b == b'\r').next() {
            let line = String::from_utf8_lossy(line);
            if let Some(path) = line.split_whitespace().nth(1) {
                paths.lock().unwrap().push(path.to_string());
            }
        }

        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }

    /// Base URL pointing at this server, shaped like the real trade API.
    pub fn base_url(&self) -> String {
        format!("http://{}/trade-api/v2", self.addr)
    }

    /// Paths requested so far, in order.
    pub fn recorded_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.shutdown.notify_waiters();
    }
}
