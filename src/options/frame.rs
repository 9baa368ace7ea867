use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
/// Render loop pacing.
pub struct FrameOptions {
    /// Frame rate cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}
