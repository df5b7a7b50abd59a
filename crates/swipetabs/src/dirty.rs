//! Change tracking between host frames.

use bitflags::bitflags;

bitflags! {
    /// What changed since the host last redrew the widget.
    ///
    /// Lets a host skip work: an indicator-only change needs no content redraw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TabsDirty: u8 {
        /// Content track offset moved.
        const OFFSET     = 1 << 0;
        /// Indicator position or width moved.
        const INDICATOR  = 1 << 1;
        /// Active tab changed (label colors, icons).
        const ACTIVE     = 1 << 2;
        /// New pages were mounted.
        const RENDER_SET = 1 << 3;
        /// Container or tab measurements changed.
        const LAYOUT     = 1 << 4;
    }
}

impl TabsDirty {
    /// Flags affecting only the tab bar.
    pub const TAB_BAR_GROUP: Self = Self::INDICATOR.union(Self::ACTIVE);

    /// Flags affecting the paged content area.
    pub const CONTENT_GROUP: Self = Self::OFFSET
        .union(Self::RENDER_SET)
        .union(Self::LAYOUT);

    /// Returns true if the tab bar needs repainting.
    #[inline]
    pub fn needs_tab_bar_redraw(&self) -> bool {
        self.intersects(Self::TAB_BAR_GROUP | Self::LAYOUT)
    }

    /// Returns true if the content area needs repainting.
    #[inline]
    pub fn needs_content_redraw(&self) -> bool {
        self.intersects(Self::CONTENT_GROUP)
    }
}
