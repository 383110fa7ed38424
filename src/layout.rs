//! Per-render viewing conditions supplied by the hosting shell.

/// Viewing conditions for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutContext {
    /// True on narrow (mobile) surfaces.
    pub is_compact_surface: bool,
}

impl LayoutContext {
    /// A narrow, mobile-sized surface.
    pub const fn compact() -> Self {
        Self {
            is_compact_surface: true,
        }
    }

    /// A desktop-sized surface.
    pub const fn wide() -> Self {
        Self {
            is_compact_surface: false,
        }
    }
}
