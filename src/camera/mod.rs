//! Camera state and the per-frame spatial rules applied to it.
//!
//! The envelope keeps the viewer inside a bounded region and the fog model
//! derives near/far fog distances from where the viewer is. Both are pure
//! and run every frame, whether the tour or the user is driving.

/// Elastic radius/height/elevation envelope.
pub mod constraint;
/// Position-driven fog distances.
pub mod fog;
/// Camera position, orientation and look-at target.
pub mod state;

pub use constraint::Envelope;
pub use fog::{FogModel, FogRange};
pub use state::{look_rotation, CameraAuthority, CameraState};

/// Distance from the vertical axis through the scene origin.
#[inline]
pub(crate) fn horizontal_distance(position: glam::Vec3) -> f32 {
    (position.x * position.x + position.z * position.z).sqrt()
}
