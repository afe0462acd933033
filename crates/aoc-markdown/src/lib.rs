//! # aoc-markdown
//!
//! Convert Advent of Code puzzle pages to Markdown.
//!
//! The transcoder understands exactly the tags the puzzle site emits
//! (`h1`-`h6`, `em`, `p`, `pre`/`code`, `ul`/`li`). Every other tag is
//! flattened to its text, so conversion never fails.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use aoc_markdown::{MarkdownTranscoder, Node};
//!
//! let article = Node::element("article")
//!     .with_child(Node::element("h2").with_child(Node::text("--- Day 1 ---")))
//!     .with_child(Node::element("p").with_child(Node::text("Hello")));
//!
//! let markdown = MarkdownTranscoder::new().convert(&article);
//! assert_eq!(markdown, "## --- Day 1 ---\nHello\n");
//! ```
//!
//! ## Example (puzzle page)
//!
//! ```rust
//! use aoc_markdown::{puzzle_part, MarkdownTranscoder};
//!
//! let page = r#"<article class="day-desc"><p>Part <em class="star">one</em></p></article>"#;
//! let part = puzzle_part(page, 1).unwrap();
//! assert_eq!(MarkdownTranscoder::new().convert(&part), "Part ***one***\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod transcoder;

#[cfg(feature = "html")]
pub use html::{day_descriptions, first_article, parse_html};
pub use node::{Element, Node};
pub use rules::{Tag, STAR_CLASS};
pub use transcoder::{convert, MarkdownTranscoder, TranscodeOptions};

/// Error type for puzzle page extraction
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("The task part you requested is not available.")]
    PartUnavailable { part: usize, available: usize },

    #[error("Invalid response from AoC!")]
    MissingArticle,
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Select part `part` (1-based) of a puzzle page.
#[cfg(feature = "html")]
pub fn puzzle_part(html: &str, part: usize) -> Result<Node> {
    let mut parts = day_descriptions(html);
    let available = parts.len();
    if part == 0 || part > available {
        return Err(MarkdownError::PartUnavailable { part, available });
    }
    Ok(parts.swap_remove(part - 1))
}

/// The article of an answer-submission response page.
#[cfg(feature = "html")]
pub fn response_article(html: &str) -> Result<Node> {
    first_article(html).ok_or(MarkdownError::MissingArticle)
}
