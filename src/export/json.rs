//! Nested JSON view of a Document.
//!
//! The arena is flattened into a tree of plain records so hosts that render
//! on the client side can consume the page without the CSS class layer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Document, NodeId, Role};

/// One node of the JSON view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonNode {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

/// Build the JSON view rooted at the document root.
pub fn to_json_tree(doc: &Document) -> JsonNode {
    build_node(doc, NodeId::ROOT)
}

/// Serialize a document to a `serde_json::Value`.
pub fn to_json(doc: &Document) -> serde_json::Value {
    // JsonNode only holds strings, maps and vectors
    serde_json::to_value(to_json_tree(doc)).unwrap_or(serde_json::Value::Null)
}

fn build_node(doc: &Document, id: NodeId) -> JsonNode {
    let Some(node) = doc.node(id) else {
        return empty_node();
    };

    let level = match node.role {
        Role::Heading(level) => Some(level),
        _ => None,
    };
    let text = (node.role == Role::Text).then(|| doc.text(node.text).to_string());
    let style = doc.style(id).declarations().into_iter().collect();

    JsonNode {
        role: node.role.name(),
        level,
        style,
        text,
        id: doc.semantics.id(id).map(str::to_string),
        href: doc.semantics.href(id).map(str::to_string),
        src: doc.semantics.src(id).map(str::to_string),
        alt: doc.semantics.alt(id).map(str::to_string),
        children: doc.children(id).map(|c| build_node(doc, c)).collect(),
    }
}

fn empty_node() -> JsonNode {
    JsonNode {
        role: Role::Text.name(),
        level: None,
        style: BTreeMap::new(),
        text: None,
        id: None,
        href: None,
        src: None,
        alt: None,
        children: Vec::new(),
    }
}
