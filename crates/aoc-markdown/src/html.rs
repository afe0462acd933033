//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and converts them
//! to the [`Node`] structure consumed by the transcoder.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node as ScraperNode, Selector};

use crate::node::{Element, Node};

static DAY_DESC: Lazy<Selector> = Lazy::new(|| selector("article.day-desc"));
static ARTICLE: Lazy<Selector> = Lazy::new(|| selector("article"));

fn selector(css: &str) -> Selector {
    // Selectors are compile-time constants; a parse failure is a programming error.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Parse an HTML fragment into a Node tree rooted at the synthetic `html`
/// element.
///
/// # Example
///
/// ```rust
/// use aoc_markdown::{parse_html, convert};
///
/// let node = parse_html("<h2>--- Day 1 ---</h2><p>Hello <em>World</em></p>");
/// assert_eq!(convert(&node), "## --- Day 1 ---\nHello **World**\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Every `article.day-desc` in a puzzle page, in document order.
/// Part one of a puzzle is the first entry.
pub fn day_descriptions(html: &str) -> Vec<Node> {
    let document = Html::parse_document(html);
    let parts: Vec<Node> = document.select(&DAY_DESC).map(scraper_to_node).collect();
    tracing::debug!(parts = parts.len(), "found puzzle descriptions");
    parts
}

/// The first `article` of a page, if any.
pub fn first_article(html: &str) -> Option<Node> {
    let document = Html::parse_document(html);
    let article = document.select(&ARTICLE).next().map(scraper_to_node);
    tracing::debug!(found = article.is_some(), "looked up response article");
    article
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let mut node = Element::new(element.value().name());

    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }

    // Comments, doctypes and processing instructions are dropped
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.children.push(Node::text(text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.children.push(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    Node::Element(node)
}
