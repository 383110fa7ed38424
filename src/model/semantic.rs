//! Sparse attributes for document nodes.
//!
//! Only links, images and sections carry attributes, so they are kept in
//! side maps instead of `Option<String>` fields on every node. Values share
//! one contiguous buffer and are referenced by TextRange.

use std::collections::HashMap;

use super::node::{NodeId, TextRange};

/// Sparse map for node attributes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SemanticMap {
    /// Contiguous buffer for all string attribute values.
    buffer: String,
    /// Link target.
    href: HashMap<NodeId, TextRange>,
    /// Asset identifier for images.
    src: HashMap<NodeId, TextRange>,
    /// Accessibility description for images.
    alt: HashMap<NodeId, TextRange>,
    /// Anchor id (sections).
    id: HashMap<NodeId, TextRange>,
}

impl SemanticMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&mut self, s: &str) -> TextRange {
        let start = self.buffer.len() as u32;
        self.buffer.push_str(s);
        TextRange::new(start, s.len() as u32)
    }

    fn get_str(&self, range: TextRange) -> &str {
        &self.buffer[range.start as usize..range.end() as usize]
    }

    /// Set the href for a node. Values are stored verbatim, so an empty
    /// configured URL still yields an (empty) target.
    pub fn set_href(&mut self, node: NodeId, href: &str) {
        let range = self.append(href);
        self.href.insert(node, range);
    }

    pub fn href(&self, node: NodeId) -> Option<&str> {
        self.href.get(&node).map(|r| self.get_str(*r))
    }

    pub fn set_src(&mut self, node: NodeId, src: &str) {
        let range = self.append(src);
        self.src.insert(node, range);
    }

    pub fn src(&self, node: NodeId) -> Option<&str> {
        self.src.get(&node).map(|r| self.get_str(*r))
    }

    pub fn set_alt(&mut self, node: NodeId, alt: &str) {
        let range = self.append(alt);
        self.alt.insert(node, range);
    }

    pub fn alt(&self, node: NodeId) -> Option<&str> {
        self.alt.get(&node).map(|r| self.get_str(*r))
    }

    /// Set the anchor id for a node.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        let range = self.append(id);
        self.id.insert(node, range);
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.id.get(&node).map(|r| self.get_str(*r))
    }

    /// Find the node carrying the given anchor id.
    pub fn find_id(&self, id: &str) -> Option<NodeId> {
        self.id
            .iter()
            .find(|(_, range)| self.get_str(**range) == id)
            .map(|(node, _)| *node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_are_sparse() {
        let mut semantics = SemanticMap::new();
        let link = NodeId(1);
        let img = NodeId(2);

        semantics.set_href(link, "https://example.com");
        semantics.set_src(img, "images/budget.png");
        semantics.set_alt(img, "budget");

        assert_eq!(semantics.href(link), Some("https://example.com"));
        assert_eq!(semantics.src(img), Some("images/budget.png"));
        assert_eq!(semantics.alt(img), Some("budget"));
        assert_eq!(semantics.href(img), None);
        assert_eq!(semantics.src(link), None);
    }

    #[test]
    fn test_empty_values_are_kept() {
        let mut semantics = SemanticMap::new();
        semantics.set_href(NodeId(1), "");
        semantics.set_alt(NodeId(2), "");
        assert_eq!(semantics.href(NodeId(1)), Some(""));
        assert_eq!(semantics.alt(NodeId(2)), Some(""));
        assert_eq!(semantics.href(NodeId(2)), None);
    }

    #[test]
    fn test_find_id() {
        let mut semantics = SemanticMap::new();
        semantics.set_id(NodeId(3), "finances");
        semantics.set_id(NodeId(7), "demography");
        assert_eq!(semantics.find_id("demography"), Some(NodeId(7)));
        assert_eq!(semantics.find_id("missing"), None);
    }
}
