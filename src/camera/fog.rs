use glam::Vec3;

use super::horizontal_distance;
use crate::options::FogOptions;

/// Near/far fog distances handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogRange {
    /// Distance where fog starts.
    pub near: f32,
    /// Distance where fog is fully opaque.
    pub far: f32,
}

/// Distance fog that hides far geography once the viewer climbs high or
/// drifts far out, and stays clear around the normal operating area.
///
/// Stateless: the same position always gives the same range.
#[derive(Debug, Clone, PartialEq)]
pub struct FogModel {
    options: FogOptions,
}

impl FogModel {
    /// Build from options.
    #[must_use]
    pub fn new(options: &FogOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }

    /// Fog factor in [0, 1]: the larger of the height and distance factors.
    #[must_use]
    pub fn factor(&self, position: Vec3) -> f32 {
        let o = &self.options;
        let height = (position.y / o.reference_height).clamp(0.0, 1.0);
        let distance =
            (horizontal_distance(position) / o.reference_distance).clamp(0.0, 1.0);
        height.max(distance)
    }

    /// Near/far distances for a camera at `position`.
    #[must_use]
    pub fn compute_fog(&self, position: Vec3) -> FogRange {
        let o = &self.options;
        let factor = self.factor(position);
        if factor > o.threshold {
            let intensity = (factor - o.threshold) / (1.0 - o.threshold);
            FogRange {
                near: o.base_near - intensity * o.thickening,
                far: o.base_far - intensity * o.thickening,
            }
        } else {
            FogRange {
                near: o.clear_near,
                far: o.clear_far,
            }
        }
    }
}

impl Default for FogModel {
    fn default() -> Self {
        Self::new(&FogOptions::default())
    }
}
