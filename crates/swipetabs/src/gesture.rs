//! Drag gesture interpretation.
//!
//! A drag moves the content track live (with rubber-banding past the first and
//! last page) and, on release, resolves to a target tab using velocity first,
//! then distance, then the nearest page.

use tracing::trace;

use swipetabs_core::math::overshoot;

use crate::animation::AnimationHandle;
use crate::layout::{ContainerChange, LayoutTracker};
use crate::transition::{Rejection, TabChange, TransitionContext, TransitionController};

/// Release speed (px/s) above which the drag direction decides the target.
pub const VELOCITY_THRESHOLD: f32 = 500.0;

/// Fraction of the container width a drag must cover to change tabs.
pub const DISTANCE_THRESHOLD: f32 = 0.25;

/// Share of the overscroll applied past the first or last page.
pub const RUBBER_BAND_FACTOR: f32 = 0.3;

/// Damp the part of `candidate` lying outside `[min, max]`.
pub fn rubber_band(candidate: f32, min: f32, max: f32) -> f32 {
    let excess = overshoot(candidate, min, max);
    if excess > 0.0 {
        max + excess * RUBBER_BAND_FACTOR
    } else if excess < 0.0 {
        min + excess * RUBBER_BAND_FACTOR
    } else {
        candidate
    }
}

/// Pick the tab a released drag should land on.
///
/// `position` is the continuous page index (`-offset / width`). Positive
/// velocity or translation means the finger moved right, toward earlier tabs.
/// Ties round half away from zero.
pub fn resolve_target(
    position: f32,
    translation: f32,
    velocity: f32,
    container_width: f32,
    tab_count: usize,
) -> usize {
    let directional = |sign: f32| {
        if sign > 0.0 {
            position.floor()
        } else {
            position.ceil()
        }
    };

    let target = if velocity.abs() > VELOCITY_THRESHOLD {
        directional(velocity)
    } else if translation.abs() > container_width * DISTANCE_THRESHOLD {
        directional(translation)
    } else {
        position.round()
    };

    let last = tab_count.saturating_sub(1) as f32;
    target.clamp(0.0, last) as usize
}

/// What a gesture event did.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The event had no effect (swipe disabled, locked, no active drag, unmeasured).
    Ignored,
    /// The drag began at this offset.
    Started { start_offset: f32 },
    /// The content now sits at this offset.
    Followed { offset: f32 },
    /// The release committed a tab change.
    Committed(TabChange),
    /// The release landed on the active tab; the content is settling back.
    SnappedBack(AnimationHandle),
    /// The release resolved to a change the controller dropped.
    Rejected(Rejection),
}

/// Converts a stream of drag events into offset updates and commits.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    enabled: bool,
    start_offset: Option<f32>,
}

impl GestureInterpreter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            start_offset: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.start_offset.is_some()
    }

    /// Capture the content offset at the start of a drag.
    pub fn begin(&mut self, controller: &TransitionController) -> GestureOutcome {
        if !self.enabled {
            return GestureOutcome::Ignored;
        }
        let start_offset = controller.offset();
        self.start_offset = Some(start_offset);
        GestureOutcome::Started { start_offset }
    }

    /// Follow the finger. `translation` is the distance moved since the drag began.
    pub fn update(
        &mut self,
        translation: f32,
        controller: &mut TransitionController,
        layout: &LayoutTracker,
    ) -> GestureOutcome {
        let Some(start) = self.start_offset else {
            return GestureOutcome::Ignored;
        };
        if controller.is_locked() {
            trace!("Drag update ignored during transition");
            return GestureOutcome::Ignored;
        }
        if !layout.can_page() {
            return GestureOutcome::Ignored;
        }

        let (min, max) = layout.offset_bounds();
        let offset = rubber_band(start + translation, min, max);
        controller.follow(offset);
        GestureOutcome::Followed { offset }
    }

    /// Resolve the released drag into a commit or a snap-back.
    pub fn end(
        &mut self,
        translation: f32,
        velocity: f32,
        controller: &mut TransitionController,
        ctx: TransitionContext<'_>,
    ) -> GestureOutcome {
        if self.start_offset.take().is_none() {
            return GestureOutcome::Ignored;
        }
        if controller.is_locked() {
            trace!("Drag release ignored during transition");
            return GestureOutcome::Ignored;
        }
        if !ctx.layout.can_page() {
            trace!("Drag release ignored before container measurement");
            return GestureOutcome::Ignored;
        }

        let width = ctx.layout.container_width();
        let position = -controller.offset() / width;
        let target = resolve_target(
            position,
            translation,
            velocity,
            width,
            controller.tab_count(),
        );
        trace!(position, translation, velocity, index = target, "Drag released");

        if target == controller.active_index() {
            return match controller.settle(ctx.layout) {
                Some(handle) => GestureOutcome::SnappedBack(handle),
                None => GestureOutcome::Ignored,
            };
        }

        match controller.request_change(target, ctx) {
            Ok(change) => GestureOutcome::Committed(change),
            Err(rejection) => GestureOutcome::Rejected(rejection),
        }
    }

    /// Keep an in-progress drag anchored after the container width changed.
    ///
    /// The start offset is scaled to the new page width so the next update
    /// continues from the re-derived page instead of the stale one.
    pub fn relayout(
        &mut self,
        change: ContainerChange,
        controller: &TransitionController,
        layout: &LayoutTracker,
    ) {
        let Some(start) = self.start_offset.as_mut() else {
            return;
        };
        match change {
            ContainerChange::Resized { previous } if previous > 0.0 => {
                *start *= layout.container_width() / previous;
            }
            ContainerChange::First | ContainerChange::Resized { .. } => {
                *start = controller.offset();
            }
            ContainerChange::Unchanged | ContainerChange::Ignored => return,
        }
        trace!(start_offset = *start, "Drag start re-anchored after resize");
    }

    /// Abandon the drag without resolving it (the host cancelled the gesture).
    pub fn cancel(&mut self, controller: &mut TransitionController, layout: &LayoutTracker) {
        if self.start_offset.take().is_some() {
            controller.settle(layout);
        }
    }
}
