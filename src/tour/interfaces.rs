//! Collaborators the tour core drives but does not implement.

use glam::Vec3;

use crate::camera::{CameraState, FogRange};
use crate::viewpoint::NavigationTarget;

/// Draws the scene. Receives the final camera and fog once per frame.
pub trait SceneRenderer {
    /// Adopt this frame's camera pose.
    fn set_camera(&mut self, camera: &CameraState);
    /// Adopt this frame's fog distances.
    fn set_fog(&mut self, fog: FogRange);
    /// Render the frame.
    fn render(&mut self);
}

/// Interactive orbit controls.
///
/// Disabled while the tour holds the camera, so user deltas and tour
/// interpolation never write in the same frame.
pub trait OrbitInput {
    /// Turn user input on or off.
    fn set_enabled(&mut self, enabled: bool);
    /// Camera position the user has orbited to.
    fn position(&self) -> Vec3;
    /// Point the user is orbiting around.
    fn target(&self) -> Vec3;
    /// Take over the corrected camera after constraints were applied.
    fn sync(&mut self, _camera: &CameraState) {}
}

/// Contextual UI shown when a flight lands (info cards and the like).
pub trait ViewLayer {
    /// Called once per completed navigation.
    fn arrived(&mut self, target: &NavigationTarget);
}
