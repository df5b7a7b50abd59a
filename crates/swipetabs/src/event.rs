//! Host input delivered to the widget.

use swipetabs_core::math::Vec2;

/// One discrete input from the host.
///
/// Hosts serialize these; the widget handles them one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabsEvent {
    /// The content container was laid out.
    ContainerLayout { width: f32 },
    /// A tab bar entry was laid out.
    TabLayout { index: usize, width: f32, x: f32 },
    /// A drag began on the content area.
    PanStart,
    /// The drag moved. `translation` is measured from the drag start.
    PanUpdate { translation: Vec2 },
    /// The finger lifted. `velocity` is in pixels per second.
    PanEnd { translation: Vec2, velocity: Vec2 },
    /// The host cancelled the drag (e.g. a parent claimed the gesture).
    PanCancel,
    /// A tab bar entry was tapped.
    TabPress { index: usize },
}

impl TabsEvent {
    /// Returns true for drag events.
    pub fn is_pan(&self) -> bool {
        matches!(
            self,
            TabsEvent::PanStart
                | TabsEvent::PanUpdate { .. }
                | TabsEvent::PanEnd { .. }
                | TabsEvent::PanCancel
        )
    }
}
