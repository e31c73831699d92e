//! View state controller.
//!
//! Tracks the lifecycle of the fetch with three independent flags and
//! resolves them into a single [`ViewState`] for rendering.
//!
//! The flags can overlap: an error set by one attempt does not clear posts
//! loaded by an earlier one, and starting a fetch clears neither.  [`state`]
//! picks exactly one variant by priority:
//!
//! ```text
//! fetching  >  error  >  posts  >  idle
//! ```
//!
//! [`state`]: ViewController::state

use tracing::debug;

use crate::error::FetchError;
use crate::post::BlogPost;

/// What the body of the screen should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    /// Nothing fetched yet and nothing in flight.
    Idle,
    Fetching,
    Error(&'a str),
    Loaded(&'a [BlogPost]),
}

#[derive(Debug, Default)]
pub struct ViewController {
    fetching: bool,
    error: Option<String>,
    posts: Option<Vec<BlogPost>>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight.  Previous error and posts are kept.
    pub fn begin_fetch(&mut self) {
        debug!("fetch started");
        self.fetching = true;
    }

    /// Record the outcome of a fetch cycle.
    ///
    /// Success replaces the post list wholesale; failure stores the error's
    /// message.  Either way the fetch is no longer in flight afterwards.
    pub fn settle(&mut self, outcome: Result<Vec<BlogPost>, FetchError>) {
        match outcome {
            Ok(posts) => {
                debug!(count = posts.len(), "fetch settled with posts");
                self.posts = Some(posts);
            }
            Err(e) => {
                debug!(error = %e, "fetch settled with error");
                self.error = Some(e.to_string());
            }
        }
        self.fetching = false;
    }

    /// Posts from the most recent successful fetch, even if not on screen.
    pub fn posts(&self) -> Option<&[BlogPost]> {
        self.posts.as_deref()
    }

    /// The single state to render.
    pub fn state(&self) -> ViewState<'_> {
        if self.fetching {
            ViewState::Fetching
        } else if let Some(error) = &self.error {
            ViewState::Error(error)
        } else if let Some(posts) = &self.posts {
            ViewState::Loaded(posts)
        } else {
            ViewState::Idle
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
