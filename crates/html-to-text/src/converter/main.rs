//! Main conversion pipeline for HTML to plain text.
//!
//! This module implements the public entry point and the tree walker that
//! turns a parsed document into raw text. The walker never recurses: it drives
//! an explicit stack of enter/exit work items, so the depth of the document is
//! limited by heap memory rather than by the thread's call stack.

use html5ever::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::RcDom;
use tracing::debug;

use crate::converter::context::{DomContext, NodeId, build_dom_context};
use crate::converter::rules::{classify_entry, classify_exit};
use crate::converter::utility::preprocessing::preprocess_html;
use crate::error::{ConversionError, Result};
use crate::text::normalize_output;

/// A pending step of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkItem {
    /// Emit the node's prefix and schedule its children.
    Enter(NodeId),
    /// Emit the node's suffix; all of its children are done.
    Exit(NodeId),
}

/// Counters collected while walking a document.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct WalkStats {
    /// Number of nodes entered.
    pub(crate) nodes_visited: usize,
    /// Largest number of work items pending at once.
    pub(crate) max_pending: usize,
}

/// Converts HTML to plain text.
///
/// Headings, paragraphs, list items and table cells are separated with
/// newlines, `- ` markers and tabs; images are replaced by `[image]`; script,
/// style and document-head content is dropped. The result has no leading or
/// trailing whitespace on any line and never more than one blank line in a row.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if the HTML parser fails to produce
/// a document.
///
/// # Example
///
/// ```
/// let text = html_to_text::convert("<table><tr><td>A</td><td>B</td></tr></table>")?;
/// assert_eq!(text, "A\tB");
/// # Ok::<(), html_to_text::ConversionError>(())
/// ```
pub fn convert(html: &str) -> Result<String> {
    if html.is_empty() {
        return Ok(String::new());
    }

    let preprocessed = preprocess_html(html);
    let dom = parse_document(&preprocessed)?;
    let dom_ctx = build_dom_context(&dom);
    debug!(
        input_len = html.len(),
        nodes = dom_ctx.node_count(),
        "parsed document"
    );

    let mut output = String::with_capacity(preprocessed.len());
    let stats = walk_node(DomContext::ROOT, &dom_ctx, &mut output);
    let text = normalize_output(&output);

    debug!(
        raw_len = output.len(),
        output_len = text.len(),
        nodes_visited = stats.nodes_visited,
        max_pending = stats.max_pending,
        "conversion finished"
    );

    Ok(text)
}

/// Parser options for html5ever.
///
/// Scripting is disabled so `<noscript>` content is parsed into elements
/// instead of a single raw text node.
fn parse_options() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse HTML into an rcdom tree with html5ever.
fn parse_document(html: &str) -> Result<RcDom> {
    html5ever::parse_document(RcDom::default(), parse_options())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|err| ConversionError::ParseError(format!("Failed to parse HTML: {err}")))
}

/// Walk the subtree rooted at `root` in document order, appending raw text.
///
/// Children are pushed in reverse so they pop in document order. A node's
/// `Exit` sits below its children on the stack, so its suffix is emitted only
/// after every child has been entered and exited.
pub(crate) fn walk_node(root: NodeId, dom_ctx: &DomContext, output: &mut String) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut stack = vec![WorkItem::Enter(root)];

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Enter(id) => {
                stats.nodes_visited += 1;

                let rule = classify_entry(dom_ctx, id);
                output.push_str(&rule.prefix);
                stack.push(WorkItem::Exit(id));

                if rule.descend {
                    stack.extend(dom_ctx.children_of(id).iter().rev().map(|&child| WorkItem::Enter(child)));
                }
                stats.max_pending = stats.max_pending.max(stack.len());
            }
            WorkItem::Exit(id) => {
                output.push_str(&classify_exit(dom_ctx, id));
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(html: &str) -> (String, WalkStats, DomContext) {
        let dom = parse_document(html).expect("parse");
        let dom_ctx = build_dom_context(&dom);
        let mut output = String::new();
        let stats = walk_node(DomContext::ROOT, &dom_ctx, &mut output);
        (output, stats, dom_ctx)
    }

    fn raw(html: &str) -> String {
        walk(html).0
    }

    #[test]
    fn test_raw_heading() {
        assert_eq!(raw("<h1>Title</h1>"), "\nTitle\n");
    }

    #[test]
    fn test_raw_list() {
        assert_eq!(raw("<ul><li>One</li><li>Two</li></ul>"), "\n- One\n- Two\n");
    }

    #[test]
    fn test_raw_table_cells() {
        assert_eq!(raw("<table><tr><td>A</td><td>B</td></tr></table>"), "\n\tA\tB");
    }

    #[test]
    fn test_raw_script_skipped() {
        assert_eq!(raw("<p>Hello<script>alert(1)</script>World</p>"), "\nHelloWorld\n");
    }

    #[test]
    fn test_raw_image_is_leaf() {
        assert_eq!(raw("<p>See <img src=\"x\"> here</p>"), "\nSee [image] here\n");
    }

    #[test]
    fn test_raw_link_before_heading() {
        assert_eq!(raw("<a href=\"#\">Link</a><h1>Head</h1>"), "Link\n\nHead\n");
    }

    #[test]
    fn test_raw_trailing_paragraph_keeps_newline() {
        assert_eq!(raw("<section><p>A</p></section>B"), "\nA\nB");
    }

    #[test]
    fn test_raw_trailing_div_drops_newline() {
        assert_eq!(raw("<section><div>A</div></section>B"), "\nAB");
    }

    #[test]
    fn test_raw_paragraph_before_div() {
        assert_eq!(raw("<p>A</p><div>B</div>"), "\nA\nB");
    }

    #[test]
    fn test_raw_div_before_paragraph() {
        assert_eq!(raw("<div>A</div><p>B</p>"), "\nA\n\nB\n");
    }

    #[test]
    fn test_noscript_children_are_elements() {
        assert_eq!(
            raw("<p>Before</p><noscript><p>Enable <b>JS</b></p></noscript><p>After</p>"),
            "\nBefore\n\nEnable JS\n\nAfter\n"
        );
    }

    #[test]
    fn test_head_content_skipped() {
        let html = "<html><head><title>T</title><style>p{}</style></head><body>Body</body></html>";
        assert_eq!(raw(html), "Body");
    }

    #[test]
    fn test_children_visited_in_document_order() {
        assert_eq!(raw("<span>1</span><span>2</span><span>3</span><span>4</span>"), "1234");
    }

    #[test]
    fn test_every_node_entered_once() {
        let (_, stats, dom_ctx) = walk("<ul><li>a</li><li>b</li></ul><p>c</p>");
        assert_eq!(stats.nodes_visited, dom_ctx.node_count());
    }

    #[test]
    fn test_skipped_subtree_not_entered() {
        let (_, stats, dom_ctx) = walk("<p>x<script>var a = 1;</script></p>");
        assert_eq!(stats.nodes_visited, dom_ctx.node_count() - 1);
    }

    #[test]
    fn test_pending_bounded_by_depth_not_size() {
        let depth = 3000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let (output, stats, dom_ctx) = walk(&html);

        assert_eq!(output.trim(), "x");
        assert!(dom_ctx.node_count() > depth);
        // document, html, head, body plus one Exit per open div and the text.
        assert!(stats.max_pending <= depth + 8, "max_pending = {}", stats.max_pending);
    }

    #[test]
    fn test_pending_bounded_by_fan_out() {
        let width = 5000;
        let html = format!("<ul>{}</ul>", "<li>i</li>".repeat(width));
        let (_, stats, _) = walk(&html);
        assert!(stats.max_pending <= width + 8, "max_pending = {}", stats.max_pending);
        assert!(stats.max_pending >= width);
    }
}
