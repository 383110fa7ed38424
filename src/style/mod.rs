//! Style descriptors for document nodes.
//!
//! This module contains:
//! - CSS property value types (Color, Length, Display, etc.)
//! - The Style descriptor and its StyleId handle
//! - CSS serialization via the ToCss trait

mod properties;
mod to_css;
mod types;

/// Conversion of style values to CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

pub use properties::{
    BorderStyle, BoxShadow, Color, Display, FlexDirection, FontStyle, FontWeight, JustifyContent,
    Length, TextAlign, TextDecoration,
};
pub use types::{Style, StyleId};
