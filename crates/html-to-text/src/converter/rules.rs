//! Per-node emission rules.
//!
//! Every node gets a prefix on entry, a decision whether its children are
//! walked at all, and a suffix on exit. Dispatch is by lowercase tag name with
//! a default arm, so unknown elements simply pass their children through.

use std::borrow::Cow;

use tracing::trace;

use crate::converter::context::{DomContext, NodeId, NodeKind};
use crate::converter::utility::siblings::next_element_sibling_tag;
use crate::text::collapse_whitespace_cow;

/// Text emitted in place of an `<img>` element.
pub const IMAGE_PLACEHOLDER: &str = "[image]";

/// Text emitted for an `<hr>` element, followed by a newline.
pub const HORIZONTAL_RULE: &str = "----------------------------------------";

const HORIZONTAL_RULE_LINE: &str = "----------------------------------------\n";

/// Outcome of entering a node.
pub(crate) struct EntryRule {
    pub(crate) prefix: Cow<'static, str>,
    pub(crate) descend: bool,
}

impl EntryRule {
    const fn element(prefix: &'static str, descend: bool) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
            descend,
        }
    }
}

fn is_heading(tag_name: &str) -> bool {
    matches!(tag_name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Prefix and descend flag for an element, by tag name.
pub(crate) fn element_entry_rule(tag_name: &str) -> EntryRule {
    match tag_name {
        "img" => EntryRule::element(IMAGE_PLACEHOLDER, false),
        "style" | "head" | "title" | "meta" | "script" => EntryRule::element("", false),
        "hr" => EntryRule::element(HORIZONTAL_RULE_LINE, true),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "ol" | "ul" | "tr" | "p" | "div" => EntryRule::element("\n", true),
        "td" | "th" => EntryRule::element("\t", true),
        "li" => EntryRule::element("- ", true),
        _ => EntryRule::element("", true),
    }
}

/// Suffix for an element, given the tag of its next element sibling.
///
/// `p`/`br` treat a missing sibling like a non-`div` one, while `div` treats it
/// like a `div`: a trailing paragraph still ends its line, a trailing `div`
/// does not.
pub(crate) fn element_exit_rule(tag_name: &str, next_element: Option<&str>) -> Cow<'static, str> {
    let base = match tag_name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "li" => "\n",
        "p" | "br" if next_element != Some("div") => "\n",
        "div" if next_element.is_some_and(|next| next != "div") => "\n",
        _ => "",
    };

    if tag_name == "a" && next_element.is_some_and(is_heading) {
        let mut suffix = String::with_capacity(base.len() + 1);
        suffix.push_str(base);
        suffix.push('\n');
        return Cow::Owned(suffix);
    }

    Cow::Borrowed(base)
}

fn needs_sibling_context(tag_name: &str) -> bool {
    matches!(tag_name, "p" | "br" | "div" | "a")
}

/// Classify a node on entry.
pub(crate) fn classify_entry(dom_ctx: &DomContext, id: NodeId) -> EntryRule {
    match dom_ctx.kind(id) {
        NodeKind::Text(contents) => EntryRule {
            prefix: Cow::Owned(collapse_whitespace_cow(&contents).into_owned()),
            descend: false,
        },
        NodeKind::Element(tag_name) => {
            let rule = element_entry_rule(&tag_name);
            if !rule.descend && !dom_ctx.children_of(id).is_empty() {
                trace!(tag = %tag_name, "skipping subtree");
            }
            rule
        }
        NodeKind::Document => EntryRule::element("", true),
        NodeKind::Other => EntryRule::element("", false),
    }
}

/// Classify a node on exit, after all of its children have been processed.
pub(crate) fn classify_exit(dom_ctx: &DomContext, id: NodeId) -> Cow<'static, str> {
    let Some(tag_name) = dom_ctx.tag_name(id) else {
        return Cow::Borrowed("");
    };

    if needs_sibling_context(&tag_name) {
        let next = next_element_sibling_tag(dom_ctx, id);
        element_exit_rule(&tag_name, next.as_deref())
    } else {
        element_exit_rule(&tag_name, None)
    }
}
