//! Error type for the `aoc` commands.

use std::path::PathBuf;

use aoc_markdown::MarkdownError;

#[derive(Debug, thiserror::Error)]
pub enum AocError {
    #[error("There are only 25 days of Advent of Code!")]
    InvalidDay(u32),

    #[error("Advent of Code began on 2015!")]
    InvalidYear(i32),

    #[error("There are only two parts to each task!")]
    InvalidPart(u32),

    #[error("The task for the day you requested is not yet available.")]
    NotYetAvailable,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {url}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid notebook {}: {source}", path.display())]
    Notebook {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Markdown(#[from] MarkdownError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No cache directory for the session key; set session.path in the config")]
    NoSessionPath,
}

pub type Result<T> = std::result::Result<T, AocError>;
