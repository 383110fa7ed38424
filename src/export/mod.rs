//! Export module for rendering composed documents.
//!
//! Provides the `Exporter` trait and format-specific implementations.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```
//! use transparency::{Configuration, LayoutContext, compose};
//! use transparency::export::{Exporter, HtmlConfig, HtmlExporter};
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::wide())?;
//! let mut out = Vec::new();
//!
//! HtmlExporter::new()
//!     .with_config(HtmlConfig {
//!         asset_base: Some("/static".to_string()),
//!         ..HtmlConfig::default()
//!     })
//!     .export(&doc, &mut out)?;
//!
//! let html = String::from_utf8(out).unwrap();
//! assert!(html.contains("src=\"/static/images/budget.png\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Write};

use crate::model::Document;

mod assets;
mod css_gen;
mod html_synth;
mod json;

pub use assets::{AssetResolver, IdentityResolver, PrefixResolver};
pub use css_gen::{CssArtifact, generate_css};
pub use html_synth::{SynthesisResult, escape_html, synthesize_html, synthesize_html_document};
pub use json::{JsonNode, to_json, to_json_tree};

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Html,
    Json,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Format::Html),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

/// Trait for exporting documents to specific formats.
///
/// Exporters use a builder pattern where configuration is held in the struct,
/// and the `export` method writes to any `Write` destination.
pub trait Exporter {
    /// Export the document to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `Vec<u8>` for in-memory output
    /// - `std::io::Stdout` for piping
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()>;
}

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Content of the `<title>` element.
    pub title: String,
    /// Value of the `lang` attribute.
    pub lang: String,
    /// Base URL prepended to asset identifiers. `None` emits them as-is.
    pub asset_base: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Transparence".to_string(),
            lang: "fr".to_string(),
            asset_base: None,
        }
    }
}

/// Standalone HTML5 page exporter.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: HtmlConfig) -> Self {
        self.config = config;
        self
    }

    /// Render to a string.
    pub fn render(&self, doc: &Document) -> String {
        let result = match &self.config.asset_base {
            Some(base) => synthesize_html_document(
                doc,
                &self.config.title,
                &self.config.lang,
                &PrefixResolver::new(base.as_str()),
            ),
            None => synthesize_html_document(
                doc,
                &self.config.title,
                &self.config.lang,
                &IdentityResolver,
            ),
        };
        result.body
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render(doc).as_bytes())
    }
}

/// JSON tree exporter.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        let tree = to_json_tree(doc);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &tree)?;
        } else {
            serde_json::to_writer(&mut *writer, &tree)?;
        }
        writer.write_all(b"\n")
    }
}
