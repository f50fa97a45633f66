//! Read-only arena view over a parsed document.
//!
//! html5ever hands back a tree of reference-counted nodes. The converter only
//! ever needs a handful of questions answered about each node (what kind is it,
//! what is its tag name, what are its children, what comes after it), so the
//! tree is flattened once into id-indexed tables and every later lookup is O(1).

use std::borrow::Cow;
use std::cell::Ref;

use html5ever::tendril::StrTendril;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Index of a node inside a [`DomContext`].
pub(crate) type NodeId = u32;

/// What the classifier needs to know about a node.
pub(crate) enum NodeKind<'a> {
    /// The synthetic document root.
    Document,
    /// An element with its lowercase tag name.
    Element(Cow<'a, str>),
    /// A text node with its raw (entity-decoded) content.
    Text(Ref<'a, StrTendril>),
    /// Doctype, comment or processing instruction.
    Other,
}

/// Flattened document tree.
///
/// Node `0` is always the document root. Children are stored in document
/// order; `next_sibling_map` links each node to the one following it under the
/// same parent, regardless of kind.
pub(crate) struct DomContext {
    pub(crate) node_map: Vec<Handle>,
    pub(crate) children_map: Vec<Vec<NodeId>>,
    pub(crate) next_sibling_map: Vec<Option<NodeId>>,
}

impl DomContext {
    pub(crate) const ROOT: NodeId = 0;

    #[allow(clippy::cast_possible_truncation)]
    fn register(&mut self, handle: Handle) -> NodeId {
        let id = self.node_map.len() as NodeId;
        self.node_map.push(handle);
        self.children_map.push(Vec::new());
        self.next_sibling_map.push(None);
        id
    }

    pub(crate) fn node_count(&self) -> usize {
        self.node_map.len()
    }

    pub(crate) fn kind(&self, id: NodeId) -> NodeKind<'_> {
        let Some(handle) = self.node_map.get(id as usize) else {
            return NodeKind::Other;
        };
        match &handle.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { name, .. } => NodeKind::Element(normalized_tag_name(&name.local)),
            NodeData::Text { contents } => NodeKind::Text(contents.borrow()),
            _ => NodeKind::Other,
        }
    }

    /// Lowercase tag name, or `None` when the node is not an element.
    pub(crate) fn tag_name(&self, id: NodeId) -> Option<Cow<'_, str>> {
        match self.kind(id) {
            NodeKind::Element(name) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children_map.get(id as usize).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.next_sibling_map.get(id as usize).copied().flatten()
    }
}

/// Lowercase a tag name, borrowing when it already is.
pub(crate) fn normalized_tag_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Flatten an rcdom tree into a [`DomContext`].
///
/// Uses an explicit pending stack so that nesting depth is bounded by heap
/// memory, not by the call stack.
pub(crate) fn build_dom_context(dom: &RcDom) -> DomContext {
    let mut ctx = DomContext {
        node_map: Vec::new(),
        children_map: Vec::new(),
        next_sibling_map: Vec::new(),
    };

    let root = ctx.register(dom.document.clone());
    let mut pending = vec![root];

    while let Some(parent_id) = pending.pop() {
        let parent = ctx.node_map[parent_id as usize].clone();
        let children = parent.children.borrow();
        let mut ids = Vec::with_capacity(children.len());
        for child in children.iter() {
            ids.push(ctx.register(child.clone()));
        }

        for pair in ids.windows(2) {
            ctx.next_sibling_map[pair[0] as usize] = Some(pair[1]);
        }

        pending.extend_from_slice(&ids);
        ctx.children_map[parent_id as usize] = ids;
    }

    ctx
}
