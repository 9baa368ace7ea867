use glam::{Mat3, Quat, Vec3};

/// Which side currently writes the camera.
///
/// The tour takes authority when a flight starts and hands it back to the
/// user when the flight lands. Orbit input is disabled while the tour holds
/// it, so there is never more than one writer in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraAuthority {
    /// Interactive orbit input drives the camera.
    #[default]
    User,
    /// An active tour transition drives the camera.
    Tour,
}

/// Camera world-space pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World rotation of the camera. The camera looks down its local -Z.
    pub orientation: Quat,
    /// Look-at target position.
    pub look_at: Vec3,
}

impl CameraState {
    /// Camera at `position` oriented toward `look_at`.
    #[must_use]
    pub fn looking_at(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            orientation: look_rotation(position, look_at),
            look_at,
        }
    }

    /// Unit view direction derived from the orientation.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::looking_at(Vec3::new(0.0, 600.0, 800.0), Vec3::ZERO)
    }
}

/// World rotation that points a camera at `eye` toward `target` with +Y up.
///
/// Looking straight up or down falls back to -Z as the up hint so the
/// camera's right vector stays +X. Coincident points give the identity.
#[must_use]
pub fn look_rotation(eye: Vec3, target: Vec3) -> Quat {
    let Some(forward) = (target - eye).try_normalize() else {
        return Quat::IDENTITY;
    };

    let right = forward
        .cross(Vec3::Y)
        .try_normalize()
        .unwrap_or_else(|| forward.cross(Vec3::NEG_Z).normalize());
    let up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize()
}
