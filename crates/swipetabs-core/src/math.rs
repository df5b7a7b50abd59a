/// Vector math re-exported from [`glam`].
///
/// Gesture translations and velocities travel as [`Vec2`] even though the
/// widget only pages horizontally, so hosts can forward their pointer deltas
/// untouched.
///
/// ```
/// use swipetabs_core::math::Vec2;
///
/// let translation = Vec2::new(-120.0, 4.0);
/// assert_eq!(translation.x, -120.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, vec2};

/// Signed distance by which `value` lies outside `[min, max]`.
///
/// Positive past `max`, negative past `min`, zero inside the range.
#[inline]
pub fn overshoot(value: f32, min: f32, max: f32) -> f32 {
    if value > max {
        value - max
    } else if value < min {
        value - min
    } else {
        0.0
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
