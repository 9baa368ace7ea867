use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fog", inline)]
#[serde(default)]
/// Distance fog that thickens as the viewer climbs or drifts outward.
pub struct FogOptions {
    /// Height at which the height factor saturates.
    #[schemars(title = "Reference Height", range(min = 100.0, max = 10000.0))]
    pub reference_height: f32,
    /// Horizontal distance at which the distance factor saturates.
    #[schemars(title = "Reference Distance", range(min = 100.0, max = 10000.0))]
    pub reference_distance: f32,
    /// Fog factor above which the fog starts closing in.
    #[schemars(title = "Threshold", range(min = 0.0, max = 0.99))]
    pub threshold: f32,
    /// Near distance just past the threshold.
    #[schemars(skip)]
    pub base_near: f32,
    /// Far distance just past the threshold.
    #[schemars(skip)]
    pub base_far: f32,
    /// How far near and far pull in at full intensity.
    #[schemars(title = "Thickening", range(min = 0.0, max = 2000.0))]
    pub thickening: f32,
    /// Near distance below the threshold.
    #[schemars(skip)]
    pub clear_near: f32,
    /// Far distance below the threshold.
    #[schemars(skip)]
    pub clear_far: f32,
}

impl Default for FogOptions {
    fn default() -> Self {
        Self {
            reference_height: 2000.0,
            reference_distance: 2000.0,
            threshold: 0.5,
            base_near: 2000.0,
            base_far: 3000.0,
            thickening: 500.0,
            clear_near: 2500.0,
            clear_far: 3500.0,
        }
    }
}
