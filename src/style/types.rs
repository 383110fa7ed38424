//! The style descriptor carried by every document node.

use super::properties::*;

/// Index of a style in a Document's style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleId(pub u32);

impl StyleId {
    /// The default style (always 0).
    pub const DEFAULT: StyleId = StyleId(0);
}

/// Style descriptor for a node.
///
/// Every property starts unset and only set properties are emitted. Shared
/// base styles are combined with struct update syntax:
///
/// ```
/// use transparency::style::{Length, Style};
///
/// fn section() -> Style {
///     Style { padding_bottom: Length::Px(100.0), ..Style::default() }
/// }
/// let flush = Style { padding_bottom: Length::ZERO, ..section() };
/// assert_eq!(flush.padding_bottom, Length::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    // Font properties
    pub font_size: Length,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,

    // Colors
    pub color: Option<Color>,
    pub background_color: Option<Color>,

    // Text
    pub text_align: TextAlign,
    pub line_height: Length,
    pub text_decoration: Option<TextDecoration>,

    // Flex layout
    pub display: Display,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub flex_grow: Option<u16>,

    // Box model
    pub margin_top: Length,
    pub margin_right: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,
    pub padding_top: Length,
    pub padding_right: Length,
    pub padding_bottom: Length,
    pub padding_left: Length,

    // Dimensions
    pub width: Length,
    pub height: Length,
    pub max_width: Length,

    // Border
    pub border_style: BorderStyle,
    pub border_width: Length,
    pub border_color: Option<Color>,
    pub border_radius: Length,
    pub box_shadow: Option<BoxShadow>,
}

impl Style {
    /// Check if this style differs from the default (has any set properties).
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Set all four paddings, in CSS shorthand order.
    pub fn padding(self, top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            padding_top: top,
            padding_right: right,
            padding_bottom: bottom,
            padding_left: left,
            ..self
        }
    }

    /// Set all four margins, in CSS shorthand order.
    pub fn margin(self, top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            margin_top: top,
            margin_right: right,
            margin_bottom: bottom,
            margin_left: left,
            ..self
        }
    }

    /// Left and right padding.
    pub fn horizontal_padding(&self) -> (Length, Length) {
        (self.padding_left, self.padding_right)
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.font_weight.0 >= 700
    }
}
