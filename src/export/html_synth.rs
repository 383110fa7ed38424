//! HTML synthesizer - renders a Document as HTML.
//!
//! This module walks the document tree and emits HTML tags, using the
//! generated CSS class names for styling. It tracks asset references
//! (images) so the host knows which files to serve.
//!
//! # Example
//!
//! ```
//! use transparency::{Configuration, LayoutContext, compose};
//! use transparency::export::{IdentityResolver, generate_css, synthesize_html};
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::compact()).unwrap();
//! let css = generate_css(&doc);
//! let result = synthesize_html(&doc, &css.class_map, &IdentityResolver);
//!
//! assert!(result.body.contains("Travaux en cours"));
//! assert!(result.assets.contains("images/budget.png"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::model::{Document, NodeId, Role};
use crate::style::StyleId;

use super::assets::AssetResolver;
use super::css_gen::generate_css;

/// Rules applied before the generated classes, so headings inherit the
/// class typography instead of user-agent defaults.
const BASE_CSS: &str = "h2, h3 { margin: 0; font-size: inherit; font-weight: inherit; }\n";

/// Result of HTML synthesis.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// The generated HTML.
    pub body: String,
    /// Asset identifiers referenced by the content (before resolution).
    pub assets: HashSet<String>,
}

/// Synthesize the HTML body content of a document.
///
/// # Arguments
///
/// * `doc` - The composed document
/// * `style_map` - Mapping from StyleId to CSS class name (from `generate_css`)
/// * `resolver` - Maps asset identifiers to emitted `src` URLs
pub fn synthesize_html(
    doc: &Document,
    style_map: &HashMap<StyleId, String>,
    resolver: &dyn AssetResolver,
) -> SynthesisResult {
    let mut ctx = SynthesisContext {
        out: String::new(),
        assets: HashSet::new(),
        doc,
        style_map,
        resolver,
        indent_level: 0,
    };

    // Walk children of root (skip the root node itself)
    for child_id in doc.children(NodeId::ROOT) {
        walk_node(child_id, &mut ctx);
    }

    SynthesisResult {
        body: ctx.out,
        assets: ctx.assets,
    }
}

/// Synthesize a complete HTML5 page with an embedded stylesheet.
///
/// The root node's style is applied to `<body>`.
pub fn synthesize_html_document(
    doc: &Document,
    title: &str,
    lang: &str,
    resolver: &dyn AssetResolver,
) -> SynthesisResult {
    let css = generate_css(doc);
    let body_result = synthesize_html(doc, &css.class_map, resolver);

    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>").unwrap();
    writeln!(out, "<html lang=\"{}\">", escape_html(lang)).unwrap();
    out.push_str("<head>\n  <meta charset=\"utf-8\"/>\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n");
    writeln!(out, "  <title>{}</title>", escape_html(title)).unwrap();
    out.push_str("  <style>\n");
    out.push_str(BASE_CSS);
    out.push_str(&css.stylesheet);
    out.push_str("  </style>\n</head>\n");

    let root_style = doc.node(NodeId::ROOT).map(|n| n.style);
    match root_style.and_then(|id| css.class_name(id)) {
        Some(class) => writeln!(out, "<body class=\"{}\">", class).unwrap(),
        None => out.push_str("<body>\n"),
    }
    out.push_str(&body_result.body);
    out.push_str("</body>\n</html>\n");

    SynthesisResult {
        body: out,
        assets: body_result.assets,
    }
}

/// Context for the synthesis walk.
struct SynthesisContext<'a> {
    out: String,
    assets: HashSet<String>,
    doc: &'a Document,
    style_map: &'a HashMap<StyleId, String>,
    resolver: &'a dyn AssetResolver,
    indent_level: usize,
}

impl SynthesisContext<'_> {
    fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
    }
}

/// Walk a node and emit its HTML.
fn walk_node(id: NodeId, ctx: &mut SynthesisContext) {
    let Some(node) = ctx.doc.node(id) else {
        return;
    };

    let role = node.role;
    let style_id = node.style;

    if role == Role::Text {
        let text = ctx.doc.text(node.text);
        ctx.out.push_str(&escape_html(text));
        return;
    }

    let (mut tag, is_void) = role_to_tag(role);
    let is_block = role.is_block();

    // Bold inline runs are emphasis, not decoration
    if role == Role::Inline && ctx.doc.style(id).is_bold() {
        tag = "strong";
    }

    let mut attrs = String::new();

    if let Some(class) = ctx.style_map.get(&style_id) {
        write!(attrs, " class=\"{}\"", class).unwrap();
    }
    if let Some(elem_id) = ctx.doc.semantics.id(id) {
        write!(attrs, " id=\"{}\"", escape_html(elem_id)).unwrap();
    }
    if let Some(href) = ctx.doc.semantics.href(id) {
        write!(attrs, " href=\"{}\"", escape_html(href)).unwrap();
    }
    if let Some(src) = ctx.doc.semantics.src(id) {
        let url = ctx.resolver.resolve(src);
        write!(attrs, " src=\"{}\"", escape_html(&url)).unwrap();
        ctx.assets.insert(src.to_string());
    }
    if let Some(alt) = ctx.doc.semantics.alt(id) {
        write!(attrs, " alt=\"{}\"", escape_html(alt)).unwrap();
    }

    if is_block {
        ctx.indent();
    }

    if is_void {
        write!(ctx.out, "<{}{}/>", tag, attrs).unwrap();
        return;
    }

    write!(ctx.out, "<{}{}>", tag, attrs).unwrap();

    // Blocks holding only blocks are laid out one child per line; blocks
    // with inline content keep it on one line so no whitespace is added.
    let block_children = is_block
        && ctx
            .doc
            .children(id)
            .all(|c| ctx.doc.node(c).is_some_and(|n| n.role.is_block()));
    let has_children = ctx.doc.children(id).next().is_some();
    let nested = block_children && has_children;

    if nested {
        ctx.out.push('\n');
        ctx.indent_level += 1;
    }

    for child_id in ctx.doc.children(id) {
        walk_node(child_id, ctx);
    }

    if nested {
        ctx.indent_level -= 1;
        ctx.indent();
    }
    write!(ctx.out, "</{}>", tag).unwrap();

    if is_block {
        ctx.out.push('\n');
    }
}

/// Map a Role to an HTML tag name.
///
/// Returns (tag_name, is_void_element).
fn role_to_tag(role: Role) -> (&'static str, bool) {
    match role {
        Role::Root | Role::Container | Role::TextBlock => ("div", false),
        Role::Section => ("section", false),
        Role::Heading(2) => ("h2", false),
        Role::Heading(_) => ("h3", false),
        Role::UnorderedList => ("ul", false),
        Role::ListItem => ("li", false),
        Role::Inline | Role::Text => ("span", false),
        Role::Link => ("a", false),
        Role::Image => ("img", true),
    }
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
