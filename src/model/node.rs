//! Document node types and roles.

use crate::style::StyleId;

/// Unique identifier for a node within a Document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Presentational role of a node.
///
/// Visual styling lives in the node's `Style`; link targets, image sources
/// and alt text live in the `SemanticMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Leaf text content referencing a range in the document text buffer.
    #[default]
    Text,
    /// Root document node.
    Root,
    /// One top-level page section.
    Section,
    /// Generic block container used for layout and grouping.
    Container,
    /// Flowing text block. Its horizontal padding follows the layout.
    TextBlock,
    /// Title with level (2 for page titles, 3 for section titles).
    Heading(u8),
    /// Inline span (bold runs, subtitles).
    Inline,
    /// Hyperlink. href in SemanticMap.
    Link,
    /// Static image. src/alt in SemanticMap.
    Image,
    UnorderedList,
    ListItem,
}

impl Role {
    /// Whether the role is rendered as a block box.
    pub fn is_block(&self) -> bool {
        !matches!(self, Role::Text | Role::Inline | Role::Link | Role::Image)
    }

    /// Stable lowercase name, used by the JSON view.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Root => "root",
            Role::Section => "section",
            Role::Container => "container",
            Role::TextBlock => "text-block",
            Role::Heading(_) => "heading",
            Role::Inline => "inline",
            Role::Link => "link",
            Role::Image => "image",
            Role::UnorderedList => "list",
            Role::ListItem => "list-item",
        }
    }
}

/// Range into the document text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// Byte offset into Document text.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextRange {
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub role: Role,
    /// Parent node (None for root).
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub style: StyleId,
    /// Text content range (only for Text nodes).
    pub text: TextRange,
}

impl Node {
    /// Create a new node with default values.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            parent: None,
            first_child: None,
            next_sibling: None,
            style: StyleId::DEFAULT,
            text: TextRange::default(),
        }
    }

    /// Create a node with the given role and style.
    pub fn styled(role: Role, style: StyleId) -> Self {
        Self {
            style,
            ..Self::new(role)
        }
    }

    /// Create a text node with the given range.
    pub fn text(range: TextRange) -> Self {
        Self {
            text: range,
            ..Self::new(Role::Text)
        }
    }
}
