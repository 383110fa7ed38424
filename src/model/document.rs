//! The rendered document tree.

use std::collections::HashMap;

use crate::style::{Style, StyleId};

use super::node::{Node, NodeId, Role, TextRange};
use super::semantic::SemanticMap;

/// A composed page in tree form.
///
/// The tree uses a parent-pointer / first-child / next-sibling arena. Nodes
/// carry a `StyleId` into the document's style table, where the page's few
/// dozen distinct descriptors are stored once each; text lives in one buffer
/// that text nodes reference by range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// All nodes in the tree (index 0 is always the root).
    nodes: Vec<Node>,
    /// Distinct styles; index 0 is the default style.
    styles: Vec<Style>,
    style_ids: HashMap<Style, StyleId>,
    /// Sparse attributes (href, src, alt, id).
    pub semantics: SemanticMap,
    text: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Role::Root)],
            styles: vec![Style::default()],
            style_ids: HashMap::from([(Style::default(), StyleId::DEFAULT)]),
            semantics: SemanticMap::new(),
            text: String::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append text to the buffer and return the range.
    pub fn append_text(&mut self, text: &str) -> TextRange {
        let start = self.text.len() as u32;
        self.text.push_str(text);
        TextRange::new(start, text.len() as u32)
    }

    /// Get text from a range.
    pub fn text(&self, range: TextRange) -> &str {
        &self.text[range.start as usize..range.end() as usize]
    }

    pub fn text_buffer(&self) -> &str {
        &self.text
    }

    /// The style of a node, or the default style for unknown IDs.
    pub fn style(&self, id: NodeId) -> &Style {
        self.node(id)
            .and_then(|n| self.style_by_id(n.style))
            .unwrap_or(&self.styles[0])
    }

    pub fn style_by_id(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id.0 as usize)
    }

    /// Number of distinct styles, the default included.
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Register a style, reusing the id of an equal descriptor.
    pub fn intern_style(&mut self, style: Style) -> StyleId {
        if let Some(&id) = self.style_ids.get(&style) {
            return id;
        }
        let id = StyleId(self.styles.len() as u32);
        self.style_ids.insert(style.clone(), id);
        self.styles.push(style);
        id
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
        }

        let last = self.children(parent).last();
        match last {
            Some(last) => {
                if let Some(last_node) = self.nodes.get_mut(last.0 as usize) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            doc: self,
            current: first_child,
        }
    }

    /// Iterate over all nodes in depth-first order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        self.iter_subtree(NodeId::ROOT)
    }

    /// Iterate over a node and its descendants in depth-first order.
    pub fn iter_subtree(&self, id: NodeId) -> DfsIter<'_> {
        DfsIter {
            doc: self,
            stack: vec![id],
        }
    }

    /// Concatenated text of a node's descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node_id in self.iter_subtree(id) {
            if let Some(node) = self.node(node_id)
                && node.role == Role::Text
            {
                out.push_str(self.text(node.text));
            }
        }
        out
    }

    /// Find the node carrying the given anchor id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.semantics.find_id(id)
    }

    /// Iterate over nodes with the given role, in depth-first order.
    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = NodeId> + '_ {
        self.iter_dfs()
            .filter(move |id| self.node(*id).is_some_and(|n| n.role == role))
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .doc
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over nodes.
pub struct DfsIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.doc.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
