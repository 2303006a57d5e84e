//! Shared configuration for the showroom
//!
//! This crate is the single source of truth for window dimensions, stage
//! constants and the page behaviour thresholds shared by the scene, the page
//! model and the app binary.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Car body color used before the user picks anything
pub const DEFAULT_BODY_COLOR: &str = "#1a1a2e";

/// Turntable speed in radians per second
pub const TURNTABLE_SPEED: f32 = 0.3;

/// Scroll offset above which the scroll-to-top control is shown
pub const SCROLL_TO_TOP_THRESHOLD: f32 = 300.0;

/// Fraction of the viewport height, measured from the top, that a section's
/// top edge must cross before its reveal fires ("top 80%")
pub const REVEAL_VIEWPORT_FRACTION: f32 = 0.8;

/// glTF asset loaded when `SHOWROOM_MODEL` is unset
pub const DEFAULT_MODEL_PATH: &str = "Audi.glb";

/// Window size; the page layout takes its viewport height from here
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Tunables for the stage and the page behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct ShowroomSettings {
    /// Asset path of the car model
    pub model_path: String,
    /// Initial car body color (hex)
    pub body_color: String,
    /// Turntable speed in radians per second
    pub turntable_speed: f32,
    /// Scroll offset above which the scroll-to-top control appears
    pub scroll_to_top_threshold: f32,
    /// Reveal trigger line as a fraction of the viewport height
    pub reveal_viewport_fraction: f32,
    /// Pixels scrolled per mouse wheel line
    pub scroll_line_height: f32,
}

impl Default for ShowroomSettings {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            body_color: DEFAULT_BODY_COLOR.to_string(),
            turntable_speed: TURNTABLE_SPEED,
            scroll_to_top_threshold: SCROLL_TO_TOP_THRESHOLD,
            reveal_viewport_fraction: REVEAL_VIEWPORT_FRACTION,
            scroll_line_height: 40.0,
        }
    }
}

impl ShowroomSettings {
    /// Defaults with the model path taken from `SHOWROOM_MODEL` when set
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(path) = std::env::var("SHOWROOM_MODEL") {
            if !path.trim().is_empty() {
                settings.model_path = path;
            }
        }
        settings
    }
}
