use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::fetch::POSTS_URL;

/// postview - fetch a list of blog posts and display them in the terminal
#[derive(Debug, Parser)]
#[command(name = "postview")]
#[command(about = "Fetch a list of blog posts from a JSON API and display them")]
#[command(version)]
pub struct Cli {
    /// Endpoint returning a JSON array of posts
    #[arg(long, default_value = POSTS_URL)]
    pub url: String,

    /// Give up on the request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "postview.log")]
    pub log_file: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
