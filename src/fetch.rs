//! The fetch cycle: GET, validate, transform.
//!
//! [`fetch_posts`] is one complete attempt.  [`spawn`] runs it on a dedicated
//! thread with its own single-threaded tokio runtime and reports the outcome
//! to the UI thread over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The cycle runs once, when the view is mounted.  There is no retry and no
//! cancellation: if the UI exits first the result is simply dropped.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::post::{to_blog_posts, BlogPost};
use crate::schema::validate_posts;

/// Default endpoint listing the posts to display.
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Message sent from the fetch thread to the UI thread.
#[derive(Debug)]
pub enum FetchMsg {
    /// The cycle produced these display records.
    Loaded(Vec<BlogPost>),
    /// The cycle failed at the transport, HTTP or validation step.
    Failed(FetchError),
}

impl From<Result<Vec<BlogPost>, FetchError>> for FetchMsg {
    fn from(outcome: Result<Vec<BlogPost>, FetchError>) -> Self {
        match outcome {
            Ok(posts) => FetchMsg::Loaded(posts),
            Err(e) => FetchMsg::Failed(e),
        }
    }
}

/// Run one fetch cycle against `url`.
///
/// The JSON body is validated at this boundary before any of it is turned
/// into display records.
pub async fn fetch_posts(client: &dyn HttpClient, url: &str) -> Result<Vec<BlogPost>, FetchError> {
    let body = client.get(url).await?;
    let raw = validate_posts(&body)?;
    Ok(to_blog_posts(raw))
}

/// Spawn the background fetch.
///
/// Returns a receiver that yields exactly one [`FetchMsg`] once the cycle
/// settles.
pub fn spawn(client: Arc<dyn HttpClient>, url: String) -> mpsc::Receiver<FetchMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                let _ = tx.send(FetchMsg::Failed(FetchError::Network(format!(
                    "could not start runtime: {e}"
                ))));
                return;
            }
        };

        let outcome = runtime.block_on(fetch_posts(client.as_ref(), &url));
        match &outcome {
            Ok(posts) => info!(count = posts.len(), %url, "fetched posts"),
            Err(FetchError::Validation(v)) => {
                warn!(issues = v.issues().len(), %url, "response failed validation");
                for issue in v.issues() {
                    debug!(%issue, "schema mismatch");
                }
            }
            Err(e) => warn!(error = %e, %url, "fetch failed"),
        }

        // A closed channel means the UI has already exited.
        let _ = tx.send(outcome.into());
    });

    rx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::time::Duration;

    /// Canned [`HttpClient`] returning a fixed outcome.
    enum FakeClient {
        Ok(Value),
        NetworkError(&'static str),
    }

    #[async_trait]
    impl HttpClient for FakeClient {
        async fn get(&self, _url: &str) -> Result<Value, FetchError> {
            match self {
                FakeClient::Ok(v) => Ok(v.clone()),
                FakeClient::NetworkError(msg) => Err(FetchError::Network(msg.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn valid_response_becomes_display_records() {
        let client = FakeClient::Ok(json!([{"id": 1, "userId": 7, "title": "Hello", "body": "World"}]));
        let posts = fetch_posts(&client, POSTS_URL).await.unwrap();

        assert_eq!(
            posts,
            vec![BlogPost {
                id: 1,
                title: "Hello".into(),
                text: "World".into(),
            }]
        );
    }

    #[tokio::test]
    async fn preserves_length_and_order() {
        let records: Vec<Value> = (1..=100)
            .rev()
            .map(|id| json!({"id": id, "userId": 1, "title": format!("t{id}"), "body": "b"}))
            .collect();
        let client = FakeClient::Ok(Value::Array(records));

        let posts = fetch_posts(&client, POSTS_URL).await.unwrap();
        assert_eq!(posts.len(), 100);
        assert_eq!(posts.first().map(|p| p.id), Some(100));
        assert_eq!(posts.last().map(|p| p.id), Some(1));
    }

    #[tokio::test]
    async fn invalid_shape_is_a_validation_error() {
        let client = FakeClient::Ok(json!([{"id": 1, "title": "x", "body": "y"}]));
        let err = fetch_posts(&client, POSTS_URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[tokio::test]
    async fn non_array_is_a_validation_error() {
        let client = FakeClient::Ok(json!({"id": 1}));
        let err = fetch_posts(&client, POSTS_URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Validation(_)));
    }

    #[tokio::test]
    async fn network_failure_propagates_message() {
        let client = FakeClient::NetworkError("Network Error");
        let err = fetch_posts(&client, POSTS_URL).await.unwrap_err();
        assert_eq!(err.to_string(), "Network Error");
    }

    #[test]
    fn spawn_sends_exactly_one_message() {
        let client = Arc::new(FakeClient::Ok(json!([])));
        let rx = spawn(client, POSTS_URL.to_string());

        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(msg, FetchMsg::Loaded(ref posts) if posts.is_empty()));
        // The sender is dropped once the thread finishes.
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
