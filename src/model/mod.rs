//! Document tree produced by the page composer.
//!
//! This module contains:
//! - The Document arena and its iterators
//! - Node types and presentational roles
//! - Sparse attributes (href, src, alt, id)

mod document;
mod node;
mod semantic;

pub use document::{ChildIter, DfsIter, Document};
pub use node::{Node, NodeId, Role, TextRange};
pub use semantic::SemanticMap;
