//! HTTP client abstraction.
//!
//! The fetch cycle only needs one operation: GET a URL and hand back the
//! parsed JSON body.  That operation is behind the [`HttpClient`] trait so
//! tests can substitute a canned response without touching the network.
//!
//! ## For contributors
//!
//! [`ReqwestClient`] performs no retries.  Unless a timeout is configured a
//! stalled server keeps the view in the loading state indefinitely.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Anything that can GET a URL and return its JSON body.
///
/// The fetch runs on a background thread, so implementations must be
/// [`Send`] + [`Sync`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and parse the body as JSON.
    ///
    /// Fails with [`FetchError::Network`] when no response arrives,
    /// [`FetchError::Status`] on a non-2xx answer and [`FetchError::Decode`]
    /// when the body is not JSON.
    async fn get(&self, url: &str) -> Result<Value, FetchError>;
}

// ---------------------------------------------------------------------------
// reqwest implementation
// ---------------------------------------------------------------------------

/// [`HttpClient`] backed by a [`reqwest::Client`].
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client.  `timeout` of `None` means requests never time out.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(status = %response.status(), "response received");
        Ok(response.json::<Value>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a random local port and return the
    /// URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}/posts")
    }

    #[tokio::test]
    async fn parses_json_body() {
        let url = serve_once("200 OK", r#"[{"id":1}]"#).await;
        let client = ReqwestClient::new(None).unwrap();

        let value = client.get(&url).await.unwrap();
        assert_eq!(value, serde_json::json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let url = serve_once("500 Internal Server Error", "").await;
        let client = ReqwestClient::new(None).unwrap();

        let err = client.get(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let url = serve_once("200 OK", "<html>nope</html>").await;
        let client = ReqwestClient::new(None).unwrap();

        let err = client.get(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 9 on localhost (discard) is closed on any sane test machine.
        let client = ReqwestClient::new(Some(Duration::from_secs(5))).unwrap();
        let err = client.get("http://127.0.0.1:9/posts").await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
        assert!(err.to_string().starts_with("Network Error"));
    }

    #[test]
    fn builds_without_timeout() {
        assert!(ReqwestClient::new(None).is_ok());
    }
}
