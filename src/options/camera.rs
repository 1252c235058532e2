use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space. Must differ from `center`.
    pub eye: [f32; 3],
    /// Orbit pivot position.
    pub center: [f32; 3],
    /// Up hint used to derive the camera basis. Must not be parallel to
    /// the view direction.
    pub up: [f32; 3],
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 10.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            center: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            zoom_speed: 1.0,
        }
    }
}
