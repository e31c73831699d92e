//! Errors raised by one fetch cycle.
//!
//! Transport and HTTP failures come from [`crate::http`]; shape mismatches
//! come from [`crate::schema`].  The view controller only ever shows the
//! [`Display`](std::fmt::Display) text, so the variants exist for logging
//! and tests rather than for the user.

use thiserror::Error;

use crate::schema::ValidationError;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established or broke mid-request.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Failed to fetch data: HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        FetchError::Network(format!("Network Error: {err}"))
    }
}
