//! CSS serialization for Style.
//!
//! Uses macros to eliminate boilerplate in CSS property serialization.

use super::ToCss;
use super::types::Style;

/// Emit property if different from default.
macro_rules! emit_if_changed {
    ($self:expr, $default:expr, $out:expr, $field:ident, $css_name:expr) => {
        if $self.$field != $default.$field {
            $out.push(($css_name, $self.$field.to_css_string()));
        }
    };
}

/// Emit optional value if Some.
macro_rules! emit_if_some {
    ($self:expr, $out:expr, $field:ident, $css_name:expr) => {
        if let Some(value) = $self.$field {
            $out.push(($css_name, value.to_css_string()));
        }
    };
}

/// Emit 4-sided property (margin, padding).
macro_rules! emit_4sided {
    ($self:expr, $default:expr, $out:expr,
     $top:ident, $right:ident, $bottom:ident, $left:ident,
     $prefix:expr) => {
        emit_if_changed!($self, $default, $out, $top, concat!($prefix, "-top"));
        emit_if_changed!($self, $default, $out, $right, concat!($prefix, "-right"));
        emit_if_changed!($self, $default, $out, $bottom, concat!($prefix, "-bottom"));
        emit_if_changed!($self, $default, $out, $left, concat!($prefix, "-left"));
    };
}

impl Style {
    /// The set properties as `(css-property, value)` pairs, in a fixed order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let default = Style::default();
        let mut out = Vec::new();

        // Font properties
        emit_if_changed!(self, default, out, font_size, "font-size");
        emit_if_changed!(self, default, out, font_weight, "font-weight");
        emit_if_changed!(self, default, out, font_style, "font-style");

        // Colors
        emit_if_some!(self, out, color, "color");
        emit_if_some!(self, out, background_color, "background-color");

        // Text properties
        emit_if_changed!(self, default, out, text_align, "text-align");
        emit_if_changed!(self, default, out, line_height, "line-height");
        emit_if_some!(self, out, text_decoration, "text-decoration");

        // Flex layout
        emit_if_changed!(self, default, out, display, "display");
        emit_if_changed!(self, default, out, flex_direction, "flex-direction");
        emit_if_changed!(self, default, out, justify_content, "justify-content");
        emit_if_some!(self, out, flex_grow, "flex-grow");

        emit_4sided!(
            self,
            default,
            out,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            "margin"
        );
        emit_4sided!(
            self,
            default,
            out,
            padding_top,
            padding_right,
            padding_bottom,
            padding_left,
            "padding"
        );

        // Dimensions
        emit_if_changed!(self, default, out, width, "width");
        emit_if_changed!(self, default, out, height, "height");
        emit_if_changed!(self, default, out, max_width, "max-width");

        // Border
        emit_if_changed!(self, default, out, border_style, "border-style");
        emit_if_changed!(self, default, out, border_width, "border-width");
        emit_if_some!(self, out, border_color, "border-color");
        emit_if_changed!(self, default, out, border_radius, "border-radius");
        emit_if_some!(self, out, box_shadow, "box-shadow");

        out
    }
}

impl ToCss for Style {
    fn to_css(&self, buf: &mut String) {
        for (name, value) in self.declarations() {
            buf.push_str(name);
            buf.push_str(": ");
            buf.push_str(&value);
            buf.push_str("; ");
        }
    }
}

impl ToCss for u16 {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}
