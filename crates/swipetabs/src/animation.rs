//! Animated scalar values driving the content track and the tab indicator.
//!
//! Every animated field is an [`AnimatedValue`]: a single-writer cell with three
//! operations, "start animation", "set immediate" and "read current". Starting an
//! animation returns an [`AnimationHandle`]; when the animation ends the cell
//! queues an [`AnimationCompletion`] carrying that handle and whether it
//! finished cleanly or was superseded.
//!
//! # Example
//!
//! ```
//! use swipetabs::animation::{AnimatedValue, AnimationSpec, TimingConfig};
//!
//! let mut offset = AnimatedValue::new(0.0);
//! let handle = offset.animate_to(-300.0, &AnimationSpec::Timing(TimingConfig::default()));
//!
//! for _ in 0..30 {
//!     offset.tick(1.0 / 60.0);
//! }
//!
//! let done: Vec<_> = offset.drain_completions().collect();
//! assert_eq!(done.len(), 1);
//! assert_eq!(done[0].handle, handle);
//! assert!(done[0].is_finished());
//! assert_eq!(offset.get(), -300.0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed integration step for spring physics, in seconds.
const SPRING_SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame delta honored by a single tick, in seconds.
const MAX_TICK: f32 = 0.25;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Easing functions for timed animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// Spring physics parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Damping coefficient (force per unit velocity).
    pub damping: f32,
    /// Spring stiffness (force per unit displacement).
    pub stiffness: f32,
    /// Mass of the animated body.
    pub mass: f32,
    /// Stop at the target instead of overshooting it.
    pub overshoot_clamping: bool,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement_threshold: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 90.0,
            mass: 0.5,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }
}

/// Timed animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Duration in seconds.
    pub duration: f32,
    /// Interpolation curve.
    pub easing: EasingFunction,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration: 0.25,
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// How a value travels to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    Spring(SpringConfig),
    Timing(TimingConfig),
}

/// Identifies one started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// Reached its target and came to rest.
    Finished,
    /// Superseded by a newer animation or an immediate write.
    Interrupted,
}

/// Completion notice for a single animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCompletion {
    pub handle: AnimationHandle,
    pub kind: CompletionKind,
}

impl AnimationCompletion {
    pub fn is_finished(&self) -> bool {
        self.kind == CompletionKind::Finished
    }
}

#[derive(Debug, Clone)]
struct TimedDriver {
    from: f32,
    to: f32,
    elapsed: f32,
    config: TimingConfig,
}

impl TimedDriver {
    /// Returns the new value and whether the animation is done.
    fn step(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt;
        if self.config.duration <= 0.0 || self.elapsed >= self.config.duration {
            return (self.to, true);
        }
        let t = self.config.easing.apply(self.elapsed / self.config.duration);
        (self.from + (self.to - self.from) * t, false)
    }
}

#[derive(Debug, Clone)]
struct SpringDriver {
    target: f32,
    /// Position relative to the target. Integrated separately to keep precision
    /// near rest when the target is far from zero.
    displacement: f32,
    velocity: f32,
    /// Side of the target the spring started on, for overshoot clamping.
    start_sign: f32,
    config: SpringConfig,
}

impl SpringDriver {
    fn new(value: f32, velocity: f32, target: f32, config: SpringConfig) -> Self {
        let displacement = value - target;
        Self {
            target,
            displacement,
            velocity,
            start_sign: displacement.signum(),
            config,
        }
    }

    fn at_rest(&self) -> bool {
        self.displacement.abs() < self.config.rest_displacement_threshold
            && self.velocity.abs() < self.config.rest_speed_threshold
    }

    /// Returns the new value and whether the spring came to rest.
    fn step(&mut self, dt: f32) -> (f32, bool) {
        let mass = self.config.mass.max(f32::EPSILON);
        let stiffness = self.config.stiffness.max(0.0);
        if stiffness == 0.0 || self.at_rest() {
            self.displacement = 0.0;
            self.velocity = 0.0;
            return (self.target, true);
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            remaining -= h;

            // Semi-implicit Euler
            let force = -stiffness * self.displacement - self.config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.displacement += self.velocity * h;

            if self.config.overshoot_clamping
                && self.start_sign != 0.0
                && self.displacement.signum() != self.start_sign
            {
                self.displacement = 0.0;
                self.velocity = 0.0;
                return (self.target, true);
            }

            if self.at_rest() {
                self.displacement = 0.0;
                self.velocity = 0.0;
                return (self.target, true);
            }
        }

        (self.target + self.displacement, false)
    }
}

#[derive(Debug, Clone)]
enum Driver {
    Timed(TimedDriver),
    Spring(SpringDriver),
}

impl Driver {
    fn target(&self) -> f32 {
        match self {
            Driver::Timed(d) => d.to,
            Driver::Spring(d) => d.target,
        }
    }
}

#[derive(Debug, Clone)]
struct Running {
    handle: AnimationHandle,
    driver: Driver,
}

/// A scalar with at most one animation in flight.
///
/// Last writer wins: starting an animation or writing immediately interrupts
/// whatever was running and queues an [`CompletionKind::Interrupted`] notice for it.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    velocity: f32,
    running: Option<Running>,
    completions: Vec<AnimationCompletion>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            running: None,
            completions: Vec::new(),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Target of the running animation, if any.
    pub fn target(&self) -> Option<f32> {
        self.running.as_ref().map(|r| r.driver.target())
    }

    /// Handle of the running animation, if any.
    pub fn current_handle(&self) -> Option<AnimationHandle> {
        self.running.as_ref().map(|r| r.handle)
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Jump to `value`, cancelling any running animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.interrupt();
        self.value = value;
        self.velocity = 0.0;
    }

    /// Start animating from the current value toward `target`.
    ///
    /// Springs inherit the current velocity so an interrupted motion stays continuous.
    pub fn animate_to(&mut self, target: f32, spec: &AnimationSpec) -> AnimationHandle {
        self.interrupt();

        let handle = AnimationHandle::next();
        let driver = match *spec {
            AnimationSpec::Timing(config) => Driver::Timed(TimedDriver {
                from: self.value,
                to: target,
                elapsed: 0.0,
                config,
            }),
            AnimationSpec::Spring(config) => {
                Driver::Spring(SpringDriver::new(self.value, self.velocity, target, config))
            }
        };
        self.running = Some(Running { handle, driver });
        handle
    }

    /// Advance the running animation by `dt` seconds.
    ///
    /// Returns `true` while an animation is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(running) = self.running.as_mut() else {
            return false;
        };
        let dt = dt.clamp(0.0, MAX_TICK);

        let previous = self.value;
        let (value, done) = match &mut running.driver {
            Driver::Timed(d) => d.step(dt),
            Driver::Spring(d) => d.step(dt),
        };
        self.value = value;
        self.velocity = match &running.driver {
            Driver::Spring(d) if !done => d.velocity,
            _ if dt > 0.0 && !done => (value - previous) / dt,
            _ => 0.0,
        };

        if done {
            let handle = running.handle;
            self.running = None;
            self.completions.push(AnimationCompletion {
                handle,
                kind: CompletionKind::Finished,
            });
            return false;
        }
        true
    }

    /// Take all completion notices queued since the last drain.
    pub fn drain_completions(&mut self) -> std::vec::Drain<'_, AnimationCompletion> {
        self.completions.drain(..)
    }

    /// Discard queued completion notices.
    pub fn clear_completions(&mut self) {
        self.completions.clear();
    }

    fn interrupt(&mut self) {
        if let Some(running) = self.running.take() {
            self.completions.push(AnimationCompletion {
                handle: running.handle,
                kind: CompletionKind::Interrupted,
            });
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &mut AnimatedValue, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            if !value.tick(1.0 / 60.0) {
                break;
            }
        }
    }

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicOut,
            EasingFunction::CubicInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_timed_animation_reaches_target() {
        let mut value = AnimatedValue::new(0.0);
        let spec = AnimationSpec::Timing(TimingConfig {
            duration: 1.0,
            easing: EasingFunction::Linear,
        });
        let handle = value.animate_to(100.0, &spec);

        assert!(value.tick(0.25));
        assert!(value.tick(0.25));
        assert!((value.get() - 50.0).abs() < 0.01);

        assert!(value.tick(0.25));
        assert!(!value.tick(0.25));
        assert_eq!(value.get(), 100.0);

        let done: Vec<_> = value.drain_completions().collect();
        assert_eq!(
            done,
            vec![AnimationCompletion {
                handle,
                kind: CompletionKind::Finished
            }]
        );
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut value = AnimatedValue::new(0.0);
        let spec = AnimationSpec::Timing(TimingConfig {
            duration: 1.0,
            easing: EasingFunction::Linear,
        });
        value.animate_to(100.0, &spec);

        assert!(value.tick(1.0));
        assert!((value.get() - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_finishes_on_next_tick() {
        let mut value = AnimatedValue::new(0.0);
        let spec = AnimationSpec::Timing(TimingConfig {
            duration: 0.0,
            easing: EasingFunction::Linear,
        });
        value.animate_to(10.0, &spec);
        assert!(value.is_animating());
        assert!(!value.tick(0.0));
        assert_eq!(value.get(), 10.0);
    }

    #[test]
    fn test_spring_settles_at_target() {
        let mut value = AnimatedValue::new(0.0);
        let handle = value.animate_to(-300.0, &AnimationSpec::Spring(SpringConfig::default()));

        run(&mut value, 6.0);

        assert!(!value.is_animating());
        assert_eq!(value.get(), -300.0);
        let done: Vec<_> = value.drain_completions().collect();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].handle, handle);
        assert!(done[0].is_finished());
    }

    #[test]
    fn test_spring_overshoot_clamping() {
        let bouncy = SpringConfig {
            damping: 2.0,
            stiffness: 200.0,
            mass: 1.0,
            ..SpringConfig::default()
        };

        // Underdamped: without clamping it crosses the target.
        let mut free = AnimatedValue::new(0.0);
        free.animate_to(100.0, &AnimationSpec::Spring(bouncy));
        let mut max_seen = 0.0f32;
        for _ in 0..60 {
            free.tick(1.0 / 60.0);
            max_seen = max_seen.max(free.get());
        }
        assert!(max_seen > 100.0);

        let mut clamped = AnimatedValue::new(0.0);
        clamped.animate_to(
            100.0,
            &AnimationSpec::Spring(SpringConfig {
                overshoot_clamping: true,
                ..bouncy
            }),
        );
        let mut max_seen = 0.0f32;
        for _ in 0..60 {
            clamped.tick(1.0 / 60.0);
            max_seen = max_seen.max(clamped.get());
        }
        assert!(max_seen <= 100.0);
        assert!(!clamped.is_animating());
    }

    #[test]
    fn test_new_animation_interrupts_previous() {
        let mut value = AnimatedValue::new(0.0);
        let spec = AnimationSpec::Timing(TimingConfig::default());
        let first = value.animate_to(100.0, &spec);
        value.tick(0.1);
        let second = value.animate_to(200.0, &spec);

        let done: Vec<_> = value.drain_completions().collect();
        assert_eq!(
            done,
            vec![AnimationCompletion {
                handle: first,
                kind: CompletionKind::Interrupted
            }]
        );
        assert_eq!(value.current_handle(), Some(second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_set_immediate_interrupts() {
        let mut value = AnimatedValue::new(0.0);
        let handle = value.animate_to(50.0, &AnimationSpec::Spring(SpringConfig::default()));
        value.set_immediate(-20.0);

        assert_eq!(value.get(), -20.0);
        assert!(!value.is_animating());
        let done: Vec<_> = value.drain_completions().collect();
        assert_eq!(done[0].handle, handle);
        assert!(!done[0].is_finished());
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut value = AnimatedValue::new(0.0);
        let spec = AnimationSpec::Spring(SpringConfig::default());
        value.animate_to(-300.0, &spec);
        for _ in 0..5 {
            value.tick(1.0 / 60.0);
        }
        let velocity = value.velocity();
        assert!(velocity < 0.0);

        value.animate_to(0.0, &spec);
        assert_eq!(value.velocity(), velocity);
    }
}
