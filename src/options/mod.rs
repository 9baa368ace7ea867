//! Tour configuration with TOML preset support.
//!
//! All static parameters of the navigation core (envelope bounds, fog
//! thresholds, transition timing, marker interpretation, frame pacing) are
//! consolidated here. Options serialize to/from TOML so a tour can ship
//! presets alongside its marker files.

mod envelope;
mod fog;
mod frame;
mod markers;
mod transition;

use std::path::Path;

pub use envelope::EnvelopeOptions;
pub use fog::FogOptions;
pub use frame::FrameOptions;
pub use markers::MarkerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fog]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera envelope bounds.
    pub envelope: EnvelopeOptions,
    /// Fog adaptation thresholds.
    pub fog: FogOptions,
    /// Tour flight timing.
    pub transition: TransitionOptions,
    /// Marker record interpretation.
    pub markers: MarkerOptions,
    /// Render loop pacing.
    #[schemars(skip)]
    pub frame: FrameOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// Reject parameter sets the envelope or fog math can't work with.
    pub fn validate(&self) -> Result<(), VantageError> {
        let env = &self.envelope;
        if env.max_radius.is_nan() || env.max_radius <= 0.0 {
            return Err(invalid("envelope.max_radius must be positive"));
        }
        if env.min_height >= env.max_height {
            return Err(invalid(
                "envelope.min_height must be below envelope.max_height",
            ));
        }
        if env.height_margin < 0.0 {
            return Err(invalid("envelope.height_margin must not be negative"));
        }
        if env.min_angle_deg >= env.max_angle_deg {
            return Err(invalid(
                "envelope.min_angle_deg must be below envelope.max_angle_deg",
            ));
        }
        if !(-90.0..=90.0).contains(&env.min_angle_deg)
            || !(-90.0..=90.0).contains(&env.max_angle_deg)
        {
            return Err(invalid("envelope angles must lie in [-90, 90] degrees"));
        }

        let fog = &self.fog;
        if fog.reference_height.is_nan()
            || fog.reference_distance.is_nan()
            || fog.reference_height <= 0.0
            || fog.reference_distance <= 0.0
        {
            return Err(invalid("fog reference height/distance must be positive"));
        }
        if !(0.0..1.0).contains(&fog.threshold) {
            return Err(invalid("fog.threshold must lie in [0, 1)"));
        }
        if fog.clear_near >= fog.clear_far || fog.base_near >= fog.base_far {
            return Err(invalid("fog near distance must be below far distance"));
        }

        let tr = &self.transition;
        if !tr.position_duration_ms.is_finite()
            || !tr.target_duration_ms.is_finite()
        {
            return Err(invalid("transition durations must be finite"));
        }
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

fn invalid(msg: &str) -> VantageError {
    VantageError::InvalidOptions(msg.to_owned())
}
