//! Incremental construction of the page document.

use crate::model::{Document, Node, NodeId, Role};
use crate::style::Style;

use super::styles;

/// Appends styled nodes to a [`Document`].
pub(crate) struct PageBuilder {
    doc: Document,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    pub fn set_root_style(&mut self, style: Style) {
        let id = self.doc.intern_style(style);
        if let Some(root) = self.doc.node_mut(NodeId::ROOT) {
            root.style = id;
        }
    }

    /// Append an empty node with the given role and style.
    pub fn block(&mut self, parent: NodeId, role: Role, style: Style) -> NodeId {
        let style = self.doc.intern_style(style);
        let node = self.doc.alloc_node(Node::styled(role, style));
        self.doc.append_child(parent, node);
        node
    }

    /// Append a bare text run.
    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let range = self.doc.append_text(text);
        let node = self.doc.alloc_node(Node::text(range));
        self.doc.append_child(parent, node);
        node
    }

    /// Append a styled node holding a single text run.
    pub fn styled_text(&mut self, parent: NodeId, role: Role, style: Style, text: &str) -> NodeId {
        let node = self.block(parent, role, style);
        self.text(node, text);
        node
    }

    /// Append a large centered page title.
    pub fn title(&mut self, parent: NodeId, text: &str) -> NodeId {
        let heading = self.block(parent, Role::Heading(2), styles::title());
        self.styled_text(heading, Role::Inline, styles::strong(), text);
        heading
    }

    /// Append a title inside a text block.
    pub fn section_title(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.styled_text(parent, Role::Heading(3), styles::section_title(), text)
    }

    /// Append a link with the page's shared link style.
    ///
    /// The label is padded with a space on each side, as it sits inline in
    /// running text.
    pub fn link(&mut self, parent: NodeId, label: &str, href: &str) -> NodeId {
        let link = self.styled_link(parent, styles::link(), href);
        self.text(link, &format!(" {label} "));
        link
    }

    /// Append an empty link node with an explicit style.
    pub fn styled_link(&mut self, parent: NodeId, style: Style, href: &str) -> NodeId {
        let link = self.block(parent, Role::Link, style);
        self.doc.semantics.set_href(link, href);
        link
    }

    /// Append an image referencing a static asset.
    pub fn image(&mut self, parent: NodeId, asset: &str, alt: &str, style: Style) -> NodeId {
        let image = self.block(parent, Role::Image, style);
        self.doc.semantics.set_src(image, asset);
        self.doc.semantics.set_alt(image, alt);
        image
    }

    /// Append an image wrapped in a padded graph container.
    pub fn graph(&mut self, parent: NodeId, asset: &str, alt: &str) -> NodeId {
        let graph = self.block(parent, Role::Container, styles::graph());
        self.image(graph, asset, alt, styles::image_stats());
        graph
    }

    /// Append an unordered list item made of a lead-in span and a body.
    pub fn bullet(&mut self, list: NodeId, lead_style: Style, lead: &str, body: &str) -> NodeId {
        let item = self.block(list, Role::ListItem, styles::bullet());
        self.styled_text(item, Role::Inline, lead_style, lead);
        self.text(item, body);
        item
    }

    /// Tag a node with an anchor id.
    pub fn anchor(&mut self, node: NodeId, id: &str) {
        self.doc.semantics.set_id(node, id);
    }

    pub fn finish(self) -> Document {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_carries_href_and_padded_label() {
        let mut page = PageBuilder::new();
        let link = page.link(NodeId::ROOT, "le changelog complet", "https://example.com/log");
        let doc = page.finish();

        assert_eq!(doc.node(link).unwrap().role, Role::Link);
        assert_eq!(doc.semantics.href(link), Some("https://example.com/log"));
        assert_eq!(doc.text_content(link), " le changelog complet ");
        assert_eq!(doc.style(link), &styles::link());
    }

    #[test]
    fn test_graph_wraps_image() {
        let mut page = PageBuilder::new();
        let graph = page.graph(NodeId::ROOT, "images/budget.png", "budget");
        let doc = page.finish();

        let children: Vec<_> = doc.children(graph).collect();
        assert_eq!(children.len(), 1);
        let image = children[0];
        assert_eq!(doc.node(image).unwrap().role, Role::Image);
        assert_eq!(doc.semantics.src(image), Some("images/budget.png"));
        assert_eq!(doc.semantics.alt(image), Some("budget"));
    }

    #[test]
    fn test_title_wraps_bold_run() {
        let mut page = PageBuilder::new();
        let title = page.title(NodeId::ROOT, "Impact et métriques");
        let doc = page.finish();

        let strong = doc.children(title).next().unwrap();
        assert!(doc.style(strong).is_bold());
        assert_eq!(doc.text_content(title), "Impact et métriques");
    }
}
