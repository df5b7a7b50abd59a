//! The transition state machine behind every tab change.
//!
//! Taps, programmatic selection and gesture commits all go through
//! [`TransitionController::request_change`]. While a settle animation is in
//! flight the controller is locked and rejects further requests; the lock is
//! released only by a clean finish of the most recently started settle.

use tracing::{debug, trace};

use crate::animation::{AnimatedValue, AnimationCompletion, AnimationHandle, AnimationSpec};
use crate::indicator::IndicatorEngine;
use crate::layout::LayoutTracker;
use crate::render_set::RenderSet;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// No transition in flight; requests are accepted.
    Idle,
    /// A change to `target` was accepted and its settle animation is running.
    Transitioning {
        target: usize,
        settle: AnimationHandle,
    },
}

/// An accepted tab change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    pub previous: usize,
    pub index: usize,
    /// Pages mounted by this change, ascending.
    pub mounted: Vec<usize>,
}

/// Why a change request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfRange,
    AlreadyActive,
    Locked,
}

/// Collaborators a commit updates alongside the content offset.
pub struct TransitionContext<'a> {
    pub layout: &'a LayoutTracker,
    pub indicator: &'a mut IndicatorEngine,
    pub render_set: &'a mut RenderSet,
}

/// Owns the active index, the transition lock and the content offset.
#[derive(Debug, Clone)]
pub struct TransitionController {
    active: usize,
    tab_count: usize,
    state: TransitionState,
    offset: AnimatedValue,
    animation: AnimationSpec,
}

impl TransitionController {
    pub fn new(tab_count: usize, active: usize, animation: AnimationSpec) -> Self {
        debug_assert!(active < tab_count);
        Self {
            active,
            tab_count,
            state: TransitionState::Idle,
            offset: AnimatedValue::new(0.0),
            animation,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// True from acceptance of a change until its settle finishes cleanly.
    pub fn is_locked(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// Current content offset.
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    pub fn animation(&self) -> &AnimationSpec {
        &self.animation
    }

    /// Check whether `target` would be accepted right now.
    pub fn check(&self, target: usize) -> Result<(), Rejection> {
        if target >= self.tab_count {
            Err(Rejection::OutOfRange)
        } else if target == self.active {
            Err(Rejection::AlreadyActive)
        } else if self.is_locked() {
            Err(Rejection::Locked)
        } else {
            Ok(())
        }
    }

    /// Commit a change to `target`, or drop it.
    ///
    /// On acceptance the lock is taken, the render set and indicator are
    /// updated and the content starts settling toward the new page.
    pub fn request_change(
        &mut self,
        target: usize,
        ctx: TransitionContext<'_>,
    ) -> Result<TabChange, Rejection> {
        if let Err(rejection) = self.check(target) {
            trace!(index = target, active = self.active, ?rejection, "Tab change rejected");
            return Err(rejection);
        }

        let previous = self.active;
        self.active = target;
        let mounted = ctx.render_set.include(target);
        ctx.indicator.animate_to(ctx.layout, target, &self.animation);

        let settle = self
            .offset
            .animate_to(ctx.layout.page_offset(target), &self.animation);
        self.state = TransitionState::Transitioning { target, settle };

        debug!(previous, index = target, ?settle, "Tab change accepted");
        Ok(TabChange {
            previous,
            index: target,
            mounted,
        })
    }

    /// Animate the content back to the active page without changing tabs.
    ///
    /// Used when a drag ends on the page it started from. Does not take the lock
    /// and does nothing while a transition is in flight.
    pub fn settle(&mut self, layout: &LayoutTracker) -> Option<AnimationHandle> {
        if self.is_locked() {
            return None;
        }
        let handle = self
            .offset
            .animate_to(layout.page_offset(self.active), &self.animation);
        debug!(active = self.active, ?handle, "Settling back to active tab");
        Some(handle)
    }

    /// Move the content directly, following a finger.
    ///
    /// Returns `false` (and leaves the offset untouched) while locked.
    pub fn follow(&mut self, offset: f32) -> bool {
        if self.is_locked() {
            return false;
        }
        self.offset.set_immediate(offset);
        true
    }

    /// Re-derive the resting offset after the container width changed.
    ///
    /// While idle the offset jumps. While transitioning the settle is
    /// re-targeted and the new animation becomes the one that releases the lock.
    pub fn relayout(&mut self, layout: &LayoutTracker) {
        let resting = layout.page_offset(self.active);
        match self.state {
            TransitionState::Idle => self.offset.set_immediate(resting),
            TransitionState::Transitioning { target, .. } => {
                let settle = self.offset.animate_to(resting, &self.animation);
                self.state = TransitionState::Transitioning { target, settle };
                debug!(index = target, ?settle, "Settle re-targeted after resize");
            }
        }
    }

    /// Handle a completion notice from the offset animation.
    ///
    /// Returns `true` if it released the lock.
    pub fn complete_animation(&mut self, completion: AnimationCompletion) -> bool {
        match self.state {
            TransitionState::Transitioning { target, settle }
                if settle == completion.handle && completion.is_finished() =>
            {
                self.state = TransitionState::Idle;
                debug!(index = target, "Transition settled");
                true
            }
            _ => {
                trace!(?completion, "Ignoring stale or interrupted completion");
                false
            }
        }
    }

    /// Advance the offset animation and route its completions.
    ///
    /// Returns `true` while the offset is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let running = self.offset.tick(dt);
        let completions: Vec<_> = self.offset.drain_completions().collect();
        for completion in completions {
            self.complete_animation(completion);
        }
        running
    }
}
