//! Render snapshot handed to the host each frame.

use swipetabs_core::color::Color;

use crate::layout::TabLayout;
use crate::tab::IconRef;

/// One page of the content track.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlot<'a> {
    pub index: usize,
    pub key: &'a str,
    /// Left edge relative to the container, including the current content offset.
    pub x: f32,
    pub width: f32,
    /// Unmounted pages render as empty placeholders of the same width.
    pub mounted: bool,
}

/// One tab bar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarItem<'a> {
    pub index: usize,
    pub label: &'a str,
    pub icon: Option<&'a IconRef>,
    pub color: Color,
    pub active: bool,
    pub bounds: Option<TabLayout>,
}

/// The indicator strip along the bottom of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorFrame {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TabsFrame<'a> {
    pub container_width: f32,
    pub content_offset: f32,
    pub pages: Vec<PageSlot<'a>>,
    pub tab_bar_height: f32,
    pub tab_bar_background: Color,
    pub tabs: Vec<TabBarItem<'a>>,
    /// `None` when the indicator is hidden.
    pub indicator: Option<IndicatorFrame>,
}

impl<'a> TabsFrame<'a> {
    /// Pages intersecting the visible container, in order.
    pub fn visible_pages(&self) -> impl Iterator<Item = &PageSlot<'a>> {
        let width = self.container_width;
        self.pages
            .iter()
            .filter(move |p| p.x + p.width > 0.0 && p.x < width)
    }
}
