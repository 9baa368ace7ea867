use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Envelope", inline)]
#[serde(default)]
/// Bounds of the region the camera may occupy.
pub struct EnvelopeOptions {
    /// Maximum horizontal distance from the scene origin.
    #[schemars(title = "Max Radius", range(min = 100.0, max = 5000.0))]
    pub max_radius: f32,
    /// Floor of the height band.
    #[schemars(title = "Min Height", range(min = 0.0, max = 2000.0))]
    pub min_height: f32,
    /// Ceiling of the height band.
    #[schemars(title = "Max Height", range(min = 100.0, max = 5000.0))]
    pub max_height: f32,
    /// Width of the soft band inside the floor and ceiling.
    #[schemars(skip)]
    pub height_margin: f32,
    /// Lowest elevation angle above the horizon, in degrees.
    #[schemars(title = "Min Elevation", range(min = 0.0, max = 89.0))]
    pub min_angle_deg: f32,
    /// Highest elevation angle above the horizon, in degrees.
    #[schemars(title = "Max Elevation", range(min = 1.0, max = 90.0))]
    pub max_angle_deg: f32,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            max_radius: 1200.0,
            min_height: 200.0,
            max_height: 1000.0,
            height_margin: 100.0,
            min_angle_deg: 30.0,
            // pi / 2.1
            max_angle_deg: 180.0 / 2.1,
        }
    }
}
