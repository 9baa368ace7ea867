//! Easing functions for camera transitions.
//!
//! Tour flights default to cubic ease-in-out so the camera leaves and
//! arrives gently. The other curves exist for presets that want a snappier
//! feel.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve applied to raw transition progress.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out: `4t³` for the first half,
    /// `1 - (-2t + 2)³ / 2` for the second.
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0], so the output is too.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
