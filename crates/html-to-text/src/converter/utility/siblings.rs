//! Sibling lookups used by the suffix rules.

use std::borrow::Cow;

use crate::converter::context::{DomContext, NodeId};

/// Tag name of the next sibling that is an element.
///
/// Text, comment and doctype siblings are skipped. Returns `None` once the
/// sibling chain is exhausted.
pub(crate) fn next_element_sibling_tag(dom_ctx: &DomContext, id: NodeId) -> Option<Cow<'_, str>> {
    let mut current = dom_ctx.next_sibling(id);
    while let Some(sibling) = current {
        if let Some(name) = dom_ctx.tag_name(sibling) {
            return Some(name);
        }
        current = dom_ctx.next_sibling(sibling);
    }
    None
}
