//! Layout tracking for the content container and the tab bar entries.

/// Measured bounds of one tab bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabLayout {
    /// Horizontal offset inside the tab bar.
    pub x: f32,
    pub width: f32,
}

/// Outcome of a container measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerChange {
    /// First valid measurement.
    First,
    /// Width differs from the previous measurement.
    Resized { previous: f32 },
    /// Same width as before.
    Unchanged,
    /// Negative or non-finite width; nothing recorded.
    Ignored,
}

/// Records the container width and each tab's measured bounds.
///
/// Tab entries may report in any order; each report upserts its slot.
#[derive(Debug, Clone)]
pub struct LayoutTracker {
    container_width: Option<f32>,
    tabs: Vec<Option<TabLayout>>,
}

impl LayoutTracker {
    pub fn new(tab_count: usize) -> Self {
        Self {
            container_width: None,
            tabs: vec![None; tab_count],
        }
    }

    /// Container width, or 0.0 before the first measurement.
    pub fn container_width(&self) -> f32 {
        self.container_width.unwrap_or(0.0)
    }

    pub fn is_container_measured(&self) -> bool {
        self.container_width.is_some()
    }

    /// Whether gestures can be mapped to page positions.
    pub fn can_page(&self) -> bool {
        self.container_width() > 0.0
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn set_container_width(&mut self, width: f32) -> ContainerChange {
        if !width.is_finite() || width < 0.0 {
            return ContainerChange::Ignored;
        }

        match self.container_width.replace(width) {
            None => ContainerChange::First,
            Some(previous) if previous == width => ContainerChange::Unchanged,
            Some(previous) => ContainerChange::Resized { previous },
        }
    }

    /// Upsert the bounds of tab `index`. Returns `false` for out-of-range indices.
    pub fn record_tab(&mut self, index: usize, width: f32, x: f32) -> bool {
        let Some(slot) = self.tabs.get_mut(index) else {
            return false;
        };
        if !width.is_finite() || !x.is_finite() {
            return false;
        }
        *slot = Some(TabLayout {
            x,
            width: width.max(0.0),
        });
        true
    }

    pub fn tab(&self, index: usize) -> Option<TabLayout> {
        self.tabs.get(index).copied().flatten()
    }

    /// Measured width of tab `index`, 0.0 if not yet measured.
    pub fn tab_width(&self, index: usize) -> f32 {
        self.tab(index).map_or(0.0, |t| t.width)
    }

    pub fn any_tab_measured(&self) -> bool {
        self.tabs.iter().any(Option::is_some)
    }

    /// Resting content offset for page `index`.
    pub fn page_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.container_width()
    }

    /// Offset range `[min, max]` the content track may rest in.
    pub fn offset_bounds(&self) -> (f32, f32) {
        let last = self.tabs.len().saturating_sub(1);
        (self.page_offset(last), 0.0)
    }
}

/// Bounds for `count` tabs sharing `bar_width` equally.
///
/// Hosts without their own layout engine can feed these into the tab
/// measurement callback.
pub fn equal_tab_bounds(bar_width: f32, count: usize) -> Vec<TabLayout> {
    if count == 0 {
        return Vec::new();
    }
    let width = bar_width.max(0.0) / count as f32;
    (0..count)
        .map(|i| TabLayout {
            x: i as f32 * width,
            width,
        })
        .collect()
}
