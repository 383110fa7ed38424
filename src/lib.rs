//! # transparency
//!
//! Composer for the Bob Emploi transparency page: a static report on the
//! product's progress, user feedback, demographics and finances.
//!
//! ## Features
//!
//! - Pure composition: the same configuration and layout always yield the
//!   same [`Document`]
//! - Deployment constants embedded at build time, with TOML/JSON overlays
//! - Compact and wide surfaces; only text-block padding differs
//! - HTML5 and JSON renderers with pluggable asset URL resolution
//!
//! ## Quick Start
//!
//! ```
//! use transparency::{Configuration, LayoutContext, compose};
//! use transparency::export::{Exporter, HtmlExporter};
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::compact())?;
//!
//! let mut html = Vec::new();
//! HtmlExporter::new().export(&doc, &mut html)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Working with Documents
//!
//! [`Document`] is an arena tree. Nodes carry a [`Role`] and an interned
//! style; link targets, image sources and anchors live alongside:
//!
//! ```
//! use transparency::{Configuration, LayoutContext, Role, compose};
//!
//! let doc = compose(Configuration::embedded(), LayoutContext::wide()).unwrap();
//! let links: Vec<_> = doc
//!     .nodes_with_role(Role::Link)
//!     .filter_map(|id| doc.semantics.href(id))
//!     .collect();
//! assert!(links.contains(&"https://github.com/bayesimpact/bob-emploi"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod page;
pub mod style;
pub mod theme;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{ConfigKey, Configuration};
pub use error::{Error, Result};
pub use layout::LayoutContext;
pub use model::{Document, Node, NodeId, Role};
pub use page::{PageSection, REQUIRED_KEYS, compose};
