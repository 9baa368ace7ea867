//! Raw marker records as they arrive from the data source.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Placement, Viewpoint};
use crate::error::{LoadError, LoadErrorKind};

/// Up axis the marker data was authored in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AxisConvention {
    /// +Y is up, matching the scene.
    #[default]
    YUp,
    /// +Z is up; y and z are swapped on load.
    ZUp,
}

impl AxisConvention {
    fn apply(self, v: Vec3) -> Vec3 {
        match self {
            Self::YUp => v,
            Self::ZUp => Vec3::new(v.x, v.z, v.y),
        }
    }
}

/// A coordinate written either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// `12.5`
    Number(f64),
    /// `"12.5"`
    Text(String),
}

impl RawNumber {
    fn parse(&self) -> Option<f32> {
        let value = match self {
            Self::Number(n) => *n as f32,
            Self::Text(s) => s.trim().parse::<f32>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// `{x, y, z}` with unparsed coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVec3 {
    /// X coordinate.
    pub x: RawNumber,
    /// Y coordinate.
    pub y: RawNumber,
    /// Z coordinate.
    pub z: RawNumber,
}

impl RawVec3 {
    fn parse(&self, marker: &str, field: &str) -> Result<Vec3, LoadError> {
        let coord = |axis: &str, n: &RawNumber| {
            n.parse().ok_or_else(|| {
                LoadError::new(
                    marker,
                    LoadErrorKind::InvalidCoordinate {
                        field: format!("{field}.{axis}"),
                        value: n.raw(),
                    },
                )
            })
        };
        Ok(Vec3::new(
            coord("x", &self.x)?,
            coord("y", &self.y)?,
            coord("z", &self.z)?,
        ))
    }
}

/// One marker file: a camera placement, a subject point, or both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Camera position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<RawVec3>,
    /// Look-at target for the camera.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<RawVec3>,
    /// Point of interest used for framing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<RawVec3>,
}

impl RawRecord {
    /// Parse from marker JSON.
    pub fn from_json(marker: &str, json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| {
            LoadError::new(marker, LoadErrorKind::Malformed(e.to_string()))
        })
    }

    /// Validate into a [`Viewpoint`].
    ///
    /// A camera without a target is rejected outright even if a subject is
    /// present. A target without a camera is ignored.
    pub fn into_viewpoint(
        self,
        id: &str,
        axis: AxisConvention,
    ) -> Result<Viewpoint, LoadError> {
        let placement = match (&self.camera, &self.target) {
            (Some(camera), Some(target)) => Some(Placement {
                position: axis.apply(camera.parse(id, "camera")?),
                look_at: axis.apply(target.parse(id, "target")?),
            }),
            (Some(_), None) => {
                return Err(LoadError::new(id, LoadErrorKind::MissingTarget))
            }
            (None, _) => None,
        };
        let subject = self
            .subject
            .as_ref()
            .map(|s| s.parse(id, "subject").map(|v| axis.apply(v)))
            .transpose()?;

        if placement.is_none() && subject.is_none() {
            return Err(LoadError::new(id, LoadErrorKind::MissingPlacement));
        }

        Ok(Viewpoint {
            id: id.to_owned(),
            placement,
            subject,
        })
    }
}
