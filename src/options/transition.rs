use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Timing of tour flights between viewpoints.
pub struct TransitionOptions {
    /// Duration of the camera position (and orientation) tween.
    #[schemars(title = "Position Duration (ms)", range(min = 0.0, max = 10000.0), extend("step" = 50.0))]
    pub position_duration_ms: f64,
    /// Duration of the look-at target tween.
    #[schemars(title = "Target Duration (ms)", range(min = 0.0, max = 10000.0), extend("step" = 50.0))]
    pub target_duration_ms: f64,
    /// Easing curve shared by both tweens.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            position_duration_ms: 2000.0,
            target_duration_ms: 2000.0,
            easing: EasingFunction::default(),
        }
    }
}
