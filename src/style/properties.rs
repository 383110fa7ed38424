//! CSS property value types and the enum_property! macro.

use std::fmt::Write;
use std::hash::{Hash, Hasher};

use super::ToCss;

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic).
///     pub enum FontStyle {
///         #[default]
///         Normal => "normal",
///         Italic => "italic",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

/// Font weight (100-900, with named constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

impl ToCss for FontWeight {
    fn to_css(&self, buf: &mut String) {
        match self.0 {
            400 => buf.push_str("normal"),
            700 => buf.push_str("bold"),
            w => write!(buf, "{}", w).unwrap(),
        }
    }
}

enum_property! {
    /// Font style (normal, italic, oblique).
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

enum_property! {
    /// Text alignment.
    pub enum TextAlign {
        #[default]
        Start => "start",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

enum_property! {
    /// Display mode.
    pub enum Display {
        #[default]
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        None => "none",
        ListItem => "list-item",
    }
}

enum_property! {
    /// Main axis of a flex container.
    pub enum FlexDirection {
        #[default]
        Row => "row",
        Column => "column",
    }
}

enum_property! {
    /// Distribution of flex items along the main axis.
    pub enum JustifyContent {
        #[default]
        Normal => "normal",
        FlexStart => "flex-start",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

enum_property! {
    /// Border style values.
    pub enum BorderStyle {
        #[default]
        None => "none",
        Solid => "solid",
        Dotted => "dotted",
        Dashed => "dashed",
    }
}

enum_property! {
    /// Text decoration line. Unset unless a style names one, so `None` is
    /// emitted explicitly (links drop their underline with it).
    pub enum TextDecoration {
        #[default]
        None => "none",
        Underline => "underline",
        LineThrough => "line-through",
    }
}

/// RGBA color (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        if self.a == 255 {
            write!(buf, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b).unwrap();
        } else if self.a == 0 {
            buf.push_str("transparent");
        } else {
            let alpha = self.a as f32 / 255.0;
            write!(buf, "rgba({},{},{},{:.2})", self.r, self.g, self.b, alpha).unwrap();
        }
    }
}

/// Length value with unit.
///
/// `Unset` is the default and is never emitted; `Auto` is the CSS keyword.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    #[default]
    Unset,
    Auto,
    Px(f32),
    Em(f32),
    Percent(f32),
    /// Unitless number (line-height multipliers).
    Number(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Length::Unset => 0u8.hash(state),
            Length::Auto => 1u8.hash(state),
            Length::Px(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            }
            Length::Em(v) => {
                3u8.hash(state);
                v.to_bits().hash(state);
            }
            Length::Percent(v) => {
                4u8.hash(state);
                v.to_bits().hash(state);
            }
            Length::Number(v) => {
                5u8.hash(state);
                v.to_bits().hash(state);
            }
        }
    }
}

impl ToCss for Length {
    fn to_css(&self, buf: &mut String) {
        match self {
            Length::Unset => buf.push_str("unset"),
            Length::Auto => buf.push_str("auto"),
            Length::Px(v) => {
                if *v == 0.0 {
                    buf.push('0');
                } else {
                    write!(buf, "{}px", v).unwrap();
                }
            }
            Length::Em(v) => write!(buf, "{}em", v).unwrap(),
            Length::Percent(v) => write!(buf, "{}%", v).unwrap(),
            Length::Number(v) => write!(buf, "{}", v).unwrap(),
        }
    }
}

/// Outer box shadow (offsets and radii in px).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxShadow {
    pub offset_x: i16,
    pub offset_y: i16,
    pub blur: u16,
    pub spread: i16,
    pub color: Color,
}

impl ToCss for BoxShadow {
    fn to_css(&self, buf: &mut String) {
        Length::Px(self.offset_x.into()).to_css(buf);
        buf.push(' ');
        Length::Px(self.offset_y.into()).to_css(buf);
        buf.push(' ');
        Length::Px(self.blur.into()).to_css(buf);
        buf.push(' ');
        Length::Px(self.spread.into()).to_css(buf);
        buf.push(' ');
        self.color.to_css(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::BLACK.to_css_string(), "#000000");
        assert_eq!(Color::hex(0x58bbfb).to_css_string(), "#58bbfb");
        assert_eq!(Color::TRANSPARENT.to_css_string(), "transparent");
        assert_eq!(Color::rgba(0, 0, 0, 51).to_css_string(), "rgba(0,0,0,0.20)");
    }

    #[test]
    fn test_length_to_css() {
        assert_eq!(Length::Auto.to_css_string(), "auto");
        assert_eq!(Length::ZERO.to_css_string(), "0");
        assert_eq!(Length::Px(140.0).to_css_string(), "140px");
        assert_eq!(Length::Percent(100.0).to_css_string(), "100%");
        assert_eq!(Length::Number(1.63).to_css_string(), "1.63");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Display::Flex.to_css_string(), "flex");
        assert_eq!(
            JustifyContent::from_css("space-between"),
            Some(JustifyContent::SpaceBetween)
        );
        assert_eq!(FontWeight::BOLD.to_css_string(), "bold");
        assert_eq!(FontWeight(300).to_css_string(), "300");
    }

    #[test]
    fn test_box_shadow_to_css() {
        let shadow = BoxShadow {
            offset_x: 0,
            offset_y: 2,
            blur: 3,
            spread: 0,
            color: Color::rgba(0, 0, 0, 51),
        };
        assert_eq!(shadow.to_css_string(), "0 2px 3px 0 rgba(0,0,0,0.20)");
    }
}
