//! MarkdownTranscoder - the main entry point for HTML to Markdown conversion.

use crate::node::{Element, Node};
use crate::rules::Tag;

/// Options for [`MarkdownTranscoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// Info string placed after the opening fence of code blocks
    pub code_language: String,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            code_language: "shell".to_string(),
        }
    }
}

/// Converts a parsed puzzle page into Markdown.
///
/// Conversion is a pure function of the node tree. Unknown tags never fail;
/// they fall back to their flattened text.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTranscoder {
    options: TranscodeOptions,
}

impl MarkdownTranscoder {
    /// Create a MarkdownTranscoder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownTranscoder with custom options
    pub fn with_options(options: TranscodeOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &TranscodeOptions {
        &self.options
    }

    /// Convert a node to Markdown.
    ///
    /// Text converts to its raw content. An element converts to the
    /// concatenation of its formatted children; the element's own tag is not
    /// applied, so pass the container (e.g. an `article`) as the root.
    pub fn convert(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => text.clone(),
            Node::Element(element) => {
                let mut out = String::new();
                self.convert_children(element, &mut out);
                tracing::debug!(tag = %element.name, bytes = out.len(), "converted element");
                out
            }
        }
    }

    fn convert_children(&self, element: &Element, out: &mut String) {
        for child in element.children() {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(child) => self.convert_element(child, out),
            }
        }
    }

    fn convert_element(&self, element: &Element, out: &mut String) {
        match Tag::of(element) {
            Tag::Heading(level) => {
                out.push_str(&"#".repeat(level));
                out.push(' ');
                self.convert_children(element, out);
                out.push('\n');
            }
            Tag::Emphasis { star } => {
                let delimiter = if star { "***" } else { "**" };
                out.push_str(delimiter);
                self.convert_children(element, out);
                out.push_str(delimiter);
            }
            Tag::Paragraph | Tag::UnorderedList => {
                self.convert_children(element, out);
                out.push('\n');
            }
            Tag::ListItem => {
                out.push_str("- ");
                self.convert_children(element, out);
                out.push('\n');
            }
            Tag::Preformatted => {
                // Without a code descendant the block is dropped
                if let Some(code) = element.find("code") {
                    out.push_str("```");
                    out.push_str(&self.options.code_language);
                    out.push('\n');
                    code.push_text(out);
                    out.push_str("\n```\n");
                }
            }
            Tag::Code => {
                out.push('`');
                element.push_text(out);
                out.push('`');
            }
            Tag::Other(_) => element.push_text(out),
        }
    }
}

/// Convert a node with default options.
pub fn convert(node: &Node) -> String {
    MarkdownTranscoder::new().convert(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, children: Vec<Node>) -> Node {
        children
            .into_iter()
            .fold(Node::element(tag), |node, child| node.with_child(child))
    }

    fn text(content: &str) -> Node {
        Node::text(content)
    }

    /// Wrap `child` in a container so its own rule is applied.
    fn wrap(child: Node) -> Node {
        el("article", vec![child])
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(convert(&text("a *b* _c_ #d")), "a *b* _c_ #d");
        assert_eq!(convert(&text("")), "");
    }

    #[test]
    fn test_headings() {
        for level in 1..=6 {
            let heading = el(&format!("h{level}"), vec![text("Day 1")]);
            let expected = format!("{} Day 1\n", "#".repeat(level));
            assert_eq!(convert(&wrap(heading)), expected);
        }
    }

    #[test]
    fn test_heading_with_nested_emphasis() {
        let h2 = el("h2", vec![text("Part "), el("em", vec![text("Two")])]);
        assert_eq!(convert(&wrap(h2)), "## Part **Two**\n");
    }

    #[test]
    fn test_emphasis() {
        let star = Node::element_with_attrs("em", vec![("class", "star")]).with_child(text("Two"));
        assert_eq!(convert(&wrap(star)), "***Two***");

        let plain = el("em", vec![text("Two")]);
        assert_eq!(convert(&wrap(plain)), "**Two**");

        let other_class =
            Node::element_with_attrs("em", vec![("class", "bright")]).with_child(text("Two"));
        assert_eq!(convert(&wrap(other_class)), "**Two**");
    }

    #[test]
    fn test_paragraph() {
        let p = el(
            "p",
            vec![text("The answer is "), el("em", vec![text("42")]), text(".")],
        );
        assert_eq!(convert(&wrap(p)), "The answer is **42**.\n");
    }

    #[test]
    fn test_code_block() {
        let pre = el("pre", vec![el("code", vec![text("print(1)")])]);
        assert_eq!(convert(&wrap(pre)), "```shell\nprint(1)\n```\n");
    }

    #[test]
    fn test_code_block_keeps_markup_as_text() {
        let pre = el(
            "pre",
            vec![el(
                "code",
                vec![text("1abc2\n"), el("em", vec![text("pqr3")]), text("stu8vwx")],
            )],
        );
        assert_eq!(convert(&wrap(pre)), "```shell\n1abc2\npqr3stu8vwx\n```\n");
    }

    #[test]
    fn test_code_block_first_match() {
        let pre = el(
            "pre",
            vec![
                el("code", vec![text("one")]),
                el("code", vec![text("two")]),
            ],
        );
        assert_eq!(convert(&wrap(pre)), "```shell\none\n```\n");
    }

    #[test]
    fn test_code_block_language_option() {
        let transcoder = MarkdownTranscoder::with_options(TranscodeOptions {
            code_language: "text".to_string(),
        });
        let pre = el("pre", vec![el("code", vec![text("x")])]);
        assert_eq!(transcoder.convert(&wrap(pre)), "```text\nx\n```\n");
    }

    #[test]
    fn test_pre_without_code_is_dropped() {
        let pre = el("pre", vec![text("loose text")]);
        assert_eq!(convert(&wrap(pre)), "");
    }

    #[test]
    fn test_inline_code() {
        let code = el("code", vec![text("x = "), el("em", vec![text("1")])]);
        assert_eq!(convert(&wrap(code)), "`x = 1`");
    }

    #[test]
    fn test_list() {
        let ul = el(
            "ul",
            vec![el("li", vec![text("a")]), el("li", vec![text("b")])],
        );
        assert_eq!(convert(&wrap(ul)), "- a\n- b\n\n");
    }

    #[test]
    fn test_list_item_with_inline_code() {
        let ul = el(
            "ul",
            vec![el("li", vec![el("code", vec![text("ab")]), text(" is nice")])],
        );
        assert_eq!(convert(&wrap(ul)), "- `ab` is nice\n\n");
    }

    #[test]
    fn test_unknown_tag_is_flattened() {
        let span = el("span", vec![text("hi")]);
        assert_eq!(convert(&wrap(span)), "hi");

        let a = el("a", vec![el("em", vec![text("deep")]), text(" link")]);
        assert_eq!(convert(&wrap(a)), "deep link");
    }

    #[test]
    fn test_empty_elements_keep_wrappers() {
        assert_eq!(convert(&wrap(el("h1", vec![]))), "# \n");
        assert_eq!(convert(&wrap(el("p", vec![]))), "\n");
        assert_eq!(convert(&wrap(el("ul", vec![]))), "\n");
        assert_eq!(convert(&wrap(el("li", vec![]))), "- \n");
        assert_eq!(convert(&wrap(el("em", vec![]))), "****");
        assert_eq!(convert(&wrap(el("code", vec![]))), "``");
        assert_eq!(convert(&wrap(el("span", vec![]))), "");
        assert_eq!(convert(&el("article", vec![])), "");
    }

    #[test]
    fn test_children_concatenate_in_order() {
        let a = el("h2", vec![text("A")]);
        let b = el("p", vec![text("B")]);
        let c = el("code", vec![text("C")]);

        let expected = [&a, &b, &c]
            .iter()
            .map(|child| convert(&wrap((*child).clone())))
            .collect::<String>();
        assert_eq!(convert(&el("article", vec![a, b, c])), expected);
        assert_eq!(expected, "## A\nB\n`C`");
    }

    #[test]
    fn test_root_tag_is_not_applied() {
        assert_eq!(convert(&el("p", vec![text("x")])), "x");
    }
}
