//! Stylesheet generation for a composed page.
//!
//! Each distinct non-default style becomes one class, named after the role
//! of the first node that uses it (`.text-block`, `.text-block-2`, `.link`).
//! Classes are numbered in document order, so the same page always yields
//! the same stylesheet.
//!
//! # Example
//!
//! ```
//! use transparency::{Configuration, LayoutContext, compose};
//! use transparency::export::generate_css;
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();
//! let css = generate_css(&doc);
//! assert!(css.stylesheet.contains("max-width: 1000px;"));
//! assert!(css.stylesheet.starts_with(".root {\n"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::model::Document;
use crate::style::StyleId;

/// A stylesheet and the class assigned to each style.
#[derive(Debug, Clone, Default)]
pub struct CssArtifact {
    pub stylesheet: String,
    pub class_map: HashMap<StyleId, String>,
}

impl CssArtifact {
    pub fn class_name(&self, id: StyleId) -> Option<&str> {
        self.class_map.get(&id).map(String::as_str)
    }

    /// True when every node uses the default style.
    pub fn is_empty(&self) -> bool {
        self.class_map.is_empty()
    }
}

/// Build the stylesheet for the styles a document's nodes actually use.
pub fn generate_css(doc: &Document) -> CssArtifact {
    let mut css = CssArtifact::default();
    let mut taken: HashSet<String> = HashSet::new();

    for id in doc.iter_dfs() {
        let Some(node) = doc.node(id) else {
            continue;
        };
        if node.style == StyleId::DEFAULT || css.class_map.contains_key(&node.style) {
            continue;
        }

        let base = node.role.name();
        let mut class = base.to_string();
        let mut n = 1;
        while taken.contains(&class) {
            n += 1;
            class = format!("{base}-{n}");
        }

        writeln!(css.stylesheet, ".{class} {{").unwrap();
        for (property, value) in doc.style(id).declarations() {
            writeln!(css.stylesheet, "  {property}: {value};").unwrap();
        }
        css.stylesheet.push_str("}\n");

        taken.insert(class.clone());
        css.class_map.insert(node.style, class);
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeId, Role};
    use crate::style::{FontWeight, Style};
    use crate::theme;

    fn add(doc: &mut Document, parent: NodeId, role: Role, style: Style) -> NodeId {
        let style = doc.intern_style(style);
        let node = doc.alloc_node(Node::styled(role, style));
        doc.append_child(parent, node);
        node
    }

    fn link_style() -> Style {
        Style {
            color: Some(theme::SKY_BLUE),
            ..Style::default()
        }
    }

    #[test]
    fn test_unstyled_document_has_no_rules() {
        let mut doc = Document::new();
        add(&mut doc, NodeId::ROOT, Role::TextBlock, Style::default());

        let css = generate_css(&doc);
        assert!(css.is_empty());
        assert_eq!(css.stylesheet, "");
    }

    #[test]
    fn test_classes_named_after_first_role() {
        let mut doc = Document::new();
        let block = add(&mut doc, NodeId::ROOT, Role::TextBlock, Style::default());
        let link = add(&mut doc, block, Role::Link, link_style());
        let strong = add(
            &mut doc,
            block,
            Role::Inline,
            Style {
                font_weight: FontWeight::BOLD,
                ..Style::default()
            },
        );

        let css = generate_css(&doc);
        assert_eq!(
            css.stylesheet,
            ".link {\n  color: #58bbfb;\n}\n.inline {\n  font-weight: bold;\n}\n"
        );
        assert_eq!(css.class_name(doc.node(link).unwrap().style), Some("link"));
        assert_eq!(css.class_name(doc.node(strong).unwrap().style), Some("inline"));
        assert_eq!(css.class_name(StyleId::DEFAULT), None);
    }

    #[test]
    fn test_shared_style_gets_one_rule() {
        let mut doc = Document::new();
        for _ in 0..3 {
            add(&mut doc, NodeId::ROOT, Role::Link, link_style());
        }

        let css = generate_css(&doc);
        assert_eq!(css.class_map.len(), 1);
        assert_eq!(css.stylesheet.matches(".link").count(), 1);
    }

    #[test]
    fn test_same_role_different_styles_are_numbered() {
        let mut doc = Document::new();
        add(&mut doc, NodeId::ROOT, Role::Link, link_style());
        add(
            &mut doc,
            NodeId::ROOT,
            Role::Link,
            Style {
                color: Some(theme::DARK_TWO),
                ..Style::default()
            },
        );

        let css = generate_css(&doc);
        let mut classes: Vec<_> = css.class_map.values().cloned().collect();
        classes.sort();
        assert_eq!(classes, vec!["link", "link-2"]);
    }

    #[test]
    fn test_page_text_blocks_share_a_class() {
        let doc = crate::compose(
            crate::Configuration::embedded(),
            crate::LayoutContext::compact(),
        )
        .unwrap();
        let css = generate_css(&doc);

        let classes: HashSet<_> = doc
            .nodes_with_role(Role::TextBlock)
            .filter_map(|id| doc.node(id))
            .filter_map(|n| css.class_name(n.style))
            .collect();
        assert_eq!(classes, HashSet::from(["text-block"]));
        assert!(css.stylesheet.contains(".text-block {\n"));
        assert!(css.stylesheet.contains("  padding-left: 50px;\n"));
    }
}
