//! Centralized interpolation utilities for camera transitions.

use glam::{Quat, Vec3};

use crate::util::easing::EasingFunction;

/// Per-track interpolation context computed once from elapsed time, then
/// shared by every value the track drives so they never desync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationContext {
    /// Raw progress (0.0 to 1.0), unmodified from the transition clock.
    pub raw_t: f32,
    /// Eased progress. This is what all interpolation uses.
    pub eased_t: f32,
}

impl InterpolationContext {
    /// Context for `elapsed_ms` into a track lasting `duration_ms`.
    ///
    /// A zero or negative duration is already complete.
    #[must_use]
    pub fn at(elapsed_ms: f64, duration_ms: f64, easing: EasingFunction) -> Self {
        let raw_t = if duration_ms > 0.0 {
            (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        Self {
            raw_t,
            eased_t: easing.evaluate(raw_t),
        }
    }

    /// Animation complete (t=1.0).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            raw_t: 1.0,
            eased_t: 1.0,
        }
    }

    /// Whether the track has reached its end.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.raw_t >= 1.0
    }
}

impl Default for InterpolationContext {
    fn default() -> Self {
        Self::identity()
    }
}

/// Lerp two positions. A complete context returns `end` exactly.
#[inline]
#[must_use]
pub fn lerp_position(ctx: &InterpolationContext, start: Vec3, end: Vec3) -> Vec3 {
    if ctx.is_complete() {
        return end;
    }
    start + (end - start) * ctx.eased_t
}

/// Slerp two orientations. A complete context returns `end` exactly.
#[inline]
#[must_use]
pub fn slerp_orientation(ctx: &InterpolationContext, start: Quat, end: Quat) -> Quat {
    if ctx.is_complete() {
        return end;
    }
    start.slerp(end, ctx.eased_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_context() {
        let ctx = InterpolationContext::identity();
        assert_eq!(ctx.raw_t, 1.0);
        assert_eq!(ctx.eased_t, 1.0);
        assert!(ctx.is_complete());
    }

    #[test]
    fn progress_is_clamped() {
        let before = InterpolationContext::at(-50.0, 1000.0, EasingFunction::Linear);
        assert_eq!(before.raw_t, 0.0);
        let after = InterpolationContext::at(5000.0, 1000.0, EasingFunction::Linear);
        assert_eq!(after.raw_t, 1.0);
    }

    #[test]
    fn zero_duration_is_complete() {
        let ctx = InterpolationContext::at(0.0, 0.0, EasingFunction::CubicInOut);
        assert!(ctx.is_complete());
        assert_eq!(ctx.eased_t, 1.0);
    }

    #[test]
    fn easing_is_applied() {
        let ctx = InterpolationContext::at(250.0, 1000.0, EasingFunction::CubicInOut);
        assert_eq!(ctx.raw_t, 0.25);
        assert!((ctx.eased_t - 0.0625).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_position() {
        let ctx = InterpolationContext::at(500.0, 1000.0, EasingFunction::Linear);
        let result = lerp_position(&ctx, Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0));
        assert!((result - Vec3::new(5.0, 10.0, 15.0)).length() < 0.001);
    }

    #[test]
    fn complete_context_lands_exactly() {
        let ctx = InterpolationContext::identity();
        let end = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(lerp_position(&ctx, Vec3::new(7.7, -3.3, 1.1), end), end);
        let q = Quat::from_rotation_y(1.2);
        assert_eq!(slerp_orientation(&ctx, Quat::IDENTITY, q), q);
    }

    #[test]
    fn slerp_halfway() {
        let ctx = InterpolationContext::at(1.0, 2.0, EasingFunction::Linear);
        let q = slerp_orientation(&ctx, Quat::IDENTITY, Quat::from_rotation_y(1.0));
        assert!(q.angle_between(Quat::from_rotation_y(0.5)) < 1e-4);
    }
}
