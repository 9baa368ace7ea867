use glam::Vec3;

use super::horizontal_distance;
use crate::options::EnvelopeOptions;

/// Fraction of the overshoot kept when the camera enters a height margin.
const HEIGHT_PULL: f32 = 0.5;
/// Weight of the angle-bound height when the elevation is out of range.
const ANGLE_BLEND: f32 = 0.2;

/// Region the camera is allowed to occupy.
///
/// Corrections are elastic rather than hard clamps (except for the radius):
/// heights inside the margin bands are pulled halfway toward the bound and
/// out-of-range elevation angles are blended 20% toward the bound each
/// frame, so free orbiting never visibly snaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    max_radius: f32,
    min_height: f32,
    max_height: f32,
    margin: f32,
    min_angle: f32,
    max_angle: f32,
}

impl Envelope {
    /// Build from options. Angles are converted to radians once here.
    #[must_use]
    pub fn new(options: &EnvelopeOptions) -> Self {
        Self {
            max_radius: options.max_radius,
            min_height: options.min_height,
            max_height: options.max_height,
            margin: options.height_margin,
            min_angle: options.min_angle_deg.to_radians(),
            max_angle: options.max_angle_deg.to_radians(),
        }
    }

    /// Maximum horizontal distance from the origin.
    #[must_use]
    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Corrected position for `position`. Pure; called once per frame.
    #[must_use]
    pub fn constrain(&self, position: Vec3) -> Vec3 {
        let mut pos = position;
        // Measured before the radius clamp; the angle step uses this value.
        let horizontal = horizontal_distance(position);

        if horizontal > self.max_radius {
            let azimuth = pos.z.atan2(pos.x);
            pos.x = self.max_radius * azimuth.cos();
            pos.z = self.max_radius * azimuth.sin();
        }

        if pos.y < self.min_height + self.margin {
            pos.y = self.min_height + (pos.y - self.min_height) * HEIGHT_PULL;
        } else if pos.y > self.max_height - self.margin {
            pos.y = self.max_height - (self.max_height - pos.y) * HEIGHT_PULL;
        }

        let angle = pos.y.atan2(horizontal);
        if angle < self.min_angle {
            let bound_y = horizontal * self.min_angle.tan();
            pos.y = pos.y * (1.0 - ANGLE_BLEND) + bound_y * ANGLE_BLEND;
        } else if angle > self.max_angle {
            let bound_y = horizontal * self.max_angle.tan();
            pos.y = pos.y * (1.0 - ANGLE_BLEND) + bound_y * ANGLE_BLEND;
        }

        pos
    }

    /// Whether `constrain` would leave `position` untouched.
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        let horizontal = horizontal_distance(position);
        let angle = position.y.atan2(horizontal);
        horizontal <= self.max_radius
            && position.y >= self.min_height + self.margin
            && position.y <= self.max_height - self.margin
            && angle >= self.min_angle
            && angle <= self.max_angle
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(&EnvelopeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_are_returned_unchanged() {
        let env = Envelope::default();
        let samples = [
            Vec3::new(300.0, 500.0, 0.0),
            Vec3::new(-250.0, 700.0, 310.0),
            Vec3::new(0.0, 400.0, -600.0),
            Vec3::new(120.0, 300.0, 120.0),
            Vec3::new(90.0, 899.0, -40.0),
        ];
        for p in samples {
            assert!(env.contains(p), "{p} should be interior");
            assert_eq!(env.constrain(p), p);
        }
    }

    #[test]
    fn outside_radius_projects_onto_circle() {
        let env = Envelope::default();
        let p = Vec3::new(3000.0, 800.0, 4000.0);
        let out = env.constrain(p);
        let horizontal = horizontal_distance(out);
        assert!((horizontal - 1200.0).abs() < 1e-2);
        // azimuth preserved
        assert!((out.z.atan2(out.x) - p.z.atan2(p.x)).abs() < 1e-5);
    }

    #[test]
    fn repeated_application_converges_on_the_radius() {
        let env = Envelope::default();
        let mut p = Vec3::new(-5000.0, 650.0, 1800.0);
        for _ in 0..50 {
            p = env.constrain(p);
            assert!((horizontal_distance(p) - env.max_radius()).abs() < 1e-2);
        }
    }

    #[test]
    fn floor_margin_pulls_halfway() {
        let env = Envelope::default();
        // r = 100, angle stays inside the band after the pull
        let out = env.constrain(Vec3::new(100.0, 250.0, 0.0));
        assert_eq!(out.y, 225.0);
    }

    #[test]
    fn ceiling_margin_pulls_halfway() {
        let env = Envelope::default();
        let out = env.constrain(Vec3::new(400.0, 960.0, 0.0));
        assert_eq!(out.y, 980.0);
    }

    #[test]
    fn shallow_angle_blends_upward() {
        let env = Envelope::default();
        // atan2(500, 1100) is about 24 degrees
        let p = Vec3::new(1100.0, 500.0, 0.0);
        let out = env.constrain(p);
        let bound_y = 1100.0 * 30f32.to_radians().tan();
        let expected = 500.0 * 0.8 + bound_y * 0.2;
        assert!((out.y - expected).abs() < 1e-3);
        assert!(out.y > p.y);
        assert!(out.y < bound_y);
    }

    #[test]
    fn steep_angle_blends_downward() {
        let env = Envelope::default();
        let p = Vec3::new(20.0, 600.0, 0.0);
        let out = env.constrain(p);
        let bound_y = 20.0 * (180f32 / 2.1).to_radians().tan();
        let expected = 600.0 * 0.8 + bound_y * 0.2;
        assert!((out.y - expected).abs() < 1e-3);
        assert!(out.y < p.y);
    }

    #[test]
    fn margin_points_are_not_interior() {
        let env = Envelope::default();
        assert!(!env.contains(Vec3::new(100.0, 250.0, 0.0)));
        assert!(!env.contains(Vec3::new(2000.0, 500.0, 0.0)));
    }
}
