//! Shared style descriptors for the transparency page.
//!
//! Base styles are plain functions; variants extend them with struct update
//! syntax so every node gets its own immutable descriptor.

use crate::layout::LayoutContext;
use crate::style::{
    BorderStyle, BoxShadow, Color, Display, FlexDirection, FontStyle, FontWeight, JustifyContent,
    Length, Style, TextAlign, TextDecoration,
};
use crate::theme;

use super::{COMPACT_TEXT_PADDING, WIDE_TEXT_PADDING};

const PX0: Length = Length::ZERO;

fn px(v: f32) -> Length {
    Length::Px(v)
}

pub(super) fn page() -> Style {
    Style {
        background_color: Some(Color::WHITE),
        ..Style::default()
    }
}

/// Centered, width-capped column holding the five sections.
pub(super) fn page_container() -> Style {
    Style {
        margin_left: Length::Auto,
        margin_right: Length::Auto,
        max_width: px(1000.0),
        ..Style::default()
    }
}

pub(super) fn text_section() -> Style {
    Style {
        background_color: Some(Color::WHITE),
        color: Some(theme::DARK_TWO),
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        font_size: px(16.0),
        line_height: Length::Number(1.63),
        padding_bottom: px(100.0),
        ..Style::default()
    }
}

pub(super) fn title() -> Style {
    Style {
        font_size: px(36.0),
        font_weight: FontWeight::BOLD,
        text_align: TextAlign::Center,
        ..Style::default()
    }
    .padding(px(45.0), PX0, px(40.0), PX0)
}

pub(super) fn section_title() -> Style {
    Style {
        font_size: px(20.0),
        font_weight: FontWeight::BOLD,
        margin_bottom: px(15.0),
        margin_top: px(40.0),
        ..Style::default()
    }
}

pub(super) fn over_title() -> Style {
    Style {
        font_style: FontStyle::Italic,
        text_align: TextAlign::Center,
        ..Style::default()
    }
    .margin(px(50.0), px(140.0), PX0, px(140.0))
}

/// Flowing text block. The only style that depends on the layout.
pub(super) fn text_block(layout: LayoutContext) -> Style {
    let side = if layout.is_compact_surface {
        COMPACT_TEXT_PADDING
    } else {
        WIDE_TEXT_PADDING
    };
    Style {
        color: Some(theme::CHARCOAL_GREY),
        line_height: Length::Number(1.63),
        margin_bottom: px(10.0),
        ..Style::default()
    }
    .padding(PX0, px(side), PX0, px(side))
}

pub(super) fn strong() -> Style {
    Style {
        font_weight: FontWeight::BOLD,
        ..Style::default()
    }
}

pub(super) fn objective() -> Style {
    Style {
        margin_top: px(25.0),
        ..strong()
    }
}

pub(super) fn link() -> Style {
    Style {
        color: Some(theme::SKY_BLUE),
        text_decoration: Some(TextDecoration::None),
        ..Style::default()
    }
}

pub(super) fn graph() -> Style {
    Style::default().padding(px(10.0), px(20.0), px(10.0), px(20.0))
}

pub(super) fn image_stats() -> Style {
    Style {
        height: Length::Auto,
        width: Length::Percent(100.0),
        ..Style::default()
    }
}

pub(super) fn milestones_zone() -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        justify_content: JustifyContent::SpaceBetween,
        margin_top: px(10.0),
        width: Length::Percent(100.0),
        ..graph()
    }
}

pub(super) fn milestone() -> Style {
    Style {
        border_style: BorderStyle::Solid,
        border_width: px(1.0),
        border_color: Some(theme::SILVER),
        border_radius: px(4.0),
        flex_grow: Some(1),
        text_align: TextAlign::Center,
        ..Style::default()
    }
    .margin(px(5.0), px(5.0), px(5.0), px(5.0))
    .padding(px(30.0), PX0, px(30.0), PX0)
}

pub(super) fn milestone_surtitle() -> Style {
    Style {
        color: Some(theme::COOL_GREY),
        font_size: px(10.0),
        line_height: Length::Number(1.0),
        ..Style::default()
    }
}

pub(super) fn milestone_subtitle(status: Option<Color>) -> Style {
    Style {
        color: status,
        font_size: px(13.0),
        font_weight: FontWeight::NORMAL,
        margin_top: px(3.0),
        ..Style::default()
    }
}

fn excerpt() -> Style {
    Style {
        font_style: FontStyle::Italic,
        text_align: TextAlign::Center,
        ..Style::default()
    }
}

pub(super) fn milestone_excerpt() -> Style {
    excerpt().margin(px(30.0), px(20.0), PX0, px(20.0))
}

pub(super) fn bullet() -> Style {
    Style {
        margin_bottom: px(20.0),
        ..Style::default()
    }
}

pub(super) fn subtitle() -> Style {
    Style {
        font_style: FontStyle::Italic,
        font_weight: FontWeight::BOLD,
        ..Style::default()
    }
    .margin(PX0, PX0, px(10.0), PX0)
}

pub(super) fn paragraph_gap() -> Style {
    Style {
        margin_top: px(20.0),
        ..Style::default()
    }
}

pub(super) fn finance_image() -> Style {
    Style {
        height: Length::Auto,
        width: Length::Percent(100.0),
        ..Style::default()
    }
    .margin(px(30.0), PX0, px(30.0), PX0)
}

pub(super) fn download_button() -> Style {
    Style {
        background_color: Some(theme::SKY_BLUE),
        border_radius: px(4.0),
        box_shadow: Some(BoxShadow {
            offset_x: 0,
            offset_y: 2,
            blur: 3,
            spread: 0,
            color: Color::rgba(0, 0, 0, 51),
        }),
        color: Some(Color::WHITE),
        text_decoration: Some(TextDecoration::None),
        width: px(430.0),
        ..Style::default()
    }
    .margin(px(100.0), Length::Auto, px(200.0), Length::Auto)
    .padding(px(15.0), px(20.0), px(15.0), px(20.0))
}

pub(super) fn download_link() -> Style {
    Style {
        color: Some(Color::WHITE),
        text_decoration: Some(TextDecoration::None),
        ..Style::default()
    }
    .padding(px(20.0), px(20.0), px(20.0), px(20.0))
}
