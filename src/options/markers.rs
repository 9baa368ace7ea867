use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::viewpoint::AxisConvention;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
/// How marker records are interpreted on load.
pub struct MarkerOptions {
    /// Up axis the marker files were exported with.
    #[schemars(title = "Up Axis")]
    pub axis: AxisConvention,
}
