//! Brand palette shared with the rest of the site.

use crate::style::Color;

pub const DARK_TWO: Color = Color::hex(0x1f1f2c);
pub const CHARCOAL_GREY: Color = Color::hex(0x383f52);
pub const COOL_GREY: Color = Color::hex(0x9596a0);
pub const SILVER: Color = Color::hex(0xd8d9e0);
pub const SKY_BLUE: Color = Color::hex(0x58bbfb);
pub const GREENISH_TEAL: Color = Color::hex(0x43d484);
pub const BUTTERSCOTCH: Color = Color::hex(0xffc647);
