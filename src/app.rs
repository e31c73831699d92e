use chrono::Local;
use ratatui::widgets::ListState;
use tracing::info;

use crate::fetch::FetchMsg;
use crate::view::{ViewController, ViewState};

pub struct App {
    /// Fetch lifecycle and the posts it produced.
    pub view: ViewController,
    /// The endpoint being displayed, shown in the header.
    pub url: String,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last fetch status message.
    pub status: String,
}

impl App {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            view: ViewController::new(),
            url: url.into(),
            list_state: ListState::default(),
            quit: false,
            status: "Starting…".into(),
        }
    }

    /// Called once, right before the background fetch is spawned.
    pub fn mount(&mut self) {
        self.view.begin_fetch();
        self.status = "Fetching…".into();
    }

    /// Apply the outcome of the background fetch.
    pub fn apply(&mut self, msg: FetchMsg) {
        let now = Local::now().format("%H:%M:%S");
        match msg {
            FetchMsg::Loaded(posts) => {
                self.status = format!("Fetched {} posts at {now}", posts.len());
                self.view.settle(Ok(posts));
                self.list_state.select(None);
            }
            FetchMsg::Failed(e) => {
                self.status = format!("Fetch failed at {now}");
                self.view.settle(Err(e));
            }
        }
        info!(status = %self.status, "view settled");
    }

    /// Number of rows currently on screen.
    pub fn visible_len(&self) -> usize {
        match self.view.state() {
            ViewState::Loaded(posts) => posts.len(),
            _ => 0,
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}
