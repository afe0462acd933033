//! Tag classification for the Markdown transcoder.
//!
//! Every element is mapped to exactly one [`Tag`]. Names are matched
//! case-sensitively; anything outside the supported subset becomes
//! [`Tag::Other`] and is flattened to plain text by the transcoder.

use crate::node::Element;

/// Class token that marks a starred (gold) emphasis.
pub const STAR_CLASS: &str = "star";

/// The supported tag subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `h1`..`h6`, carrying the level
    Heading(usize),
    /// `em`; `star` is set when the class list contains [`STAR_CLASS`]
    Emphasis { star: bool },
    /// `p`
    Paragraph,
    /// `pre`
    Preformatted,
    /// `code` outside a handled `pre`
    Code,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// Any other tag name
    Other(&'a str),
}

impl<'a> Tag<'a> {
    /// Classify an element by name and, for `em`, by class.
    pub fn of(element: &'a Element) -> Self {
        match element.name.as_str() {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "em" => Tag::Emphasis {
                star: element.has_class(STAR_CLASS),
            },
            "p" => Tag::Paragraph,
            "pre" => Tag::Preformatted,
            "code" => Tag::Code,
            "ul" => Tag::UnorderedList,
            "li" => Tag::ListItem,
            other => Tag::Other(other),
        }
    }
}
