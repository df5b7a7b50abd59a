//! Tab indicator geometry and animation.

use crate::animation::{AnimatedValue, AnimationSpec};
use crate::layout::LayoutTracker;

/// Horizontal bounds of the indicator inside the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorGeometry {
    pub position: f32,
    pub width: f32,
}

/// Geometry for tab `index` from cumulative measured widths.
///
/// Unmeasured tabs count as zero width.
pub fn compute_geometry(layout: &LayoutTracker, index: usize) -> IndicatorGeometry {
    let position: f32 = (0..index).map(|i| layout.tab_width(i)).sum();
    IndicatorGeometry {
        position,
        width: layout.tab_width(index),
    }
}

/// Drives the indicator's position and width.
///
/// The two fields animate independently; neither waits for the other.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    position: AnimatedValue,
    width: AnimatedValue,
    enabled: bool,
}

impl IndicatorEngine {
    pub fn new(enabled: bool) -> Self {
        Self {
            position: AnimatedValue::new(0.0),
            width: AnimatedValue::new(0.0),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current (possibly mid-animation) geometry.
    pub fn geometry(&self) -> IndicatorGeometry {
        IndicatorGeometry {
            position: self.position.get(),
            width: self.width.get(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.width.is_animating()
    }

    /// Place the indicator without animating.
    pub fn set_resting(&mut self, geometry: IndicatorGeometry) {
        self.position.set_immediate(geometry.position);
        self.width.set_immediate(geometry.width);
    }

    /// Animate toward the bounds of tab `index`.
    ///
    /// Does nothing while disabled or before any tab has been measured.
    /// Returns the target geometry when an animation was started.
    pub fn animate_to(
        &mut self,
        layout: &LayoutTracker,
        index: usize,
        spec: &AnimationSpec,
    ) -> Option<IndicatorGeometry> {
        if !self.enabled || !layout.any_tab_measured() {
            return None;
        }

        let target = compute_geometry(layout, index);
        self.position.animate_to(target.position, spec);
        self.width.animate_to(target.width, spec);
        Some(target)
    }

    /// Advance both fields. Returns `true` while either is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let position = self.position.tick(dt);
        let width = self.width.tick(dt);
        // Indicator completions never gate the transition lock.
        self.position.clear_completions();
        self.width.clear_completions();
        position || width
    }
}
