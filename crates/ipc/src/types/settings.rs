//! Lighting settings types.

use serde::{Deserialize, Serialize};

/// Configurable lighting settings for the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingSettings {
    /// Directional light position; the light looks at the origin
    pub sun_position: [f32; 3],
    /// Sun color as RGB (0.0-1.0)
    pub sun_color: [f32; 3],
    /// Sun illuminance in lux
    pub sun_illuminance: f32,
    /// Shadow map resolution for the directional light
    pub shadow_map_size: usize,
    /// Ambient light color as RGB (0.0-1.0)
    pub ambient_color: [f32; 3],
    /// Ambient brightness
    pub ambient_brightness: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            sun_position: [10.0, 10.0, 5.0],
            sun_color: [1.0, 1.0, 1.0],
            sun_illuminance: 10000.0,
            shadow_map_size: 2048,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_brightness: 400.0,
        }
    }
}
