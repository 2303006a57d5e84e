//! Main IPC message enums for communication between Bevy and UI.

use serde::{Deserialize, Serialize};

use crate::error::IpcError;
use crate::types::{
    ElementStyle, LightingSettings, PageContent, PageLayoutInfo, PresetInfo, SectionInfo,
};

/// Messages from Bevy to the page UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BevyToUi {
    /// Initial state sync when the UI connects
    Initialize {
        presets: Vec<PresetInfo>,
        color: String,
        sections: Vec<SectionInfo>,
        content: PageContent,
    },

    /// Model download still in flight (0-100)
    LoadProgress { progress: f32 },

    /// Model finished loading and the placeholder was removed
    ModelLoaded,

    /// Car color changed; `preset_name` is "Custom" when no preset matches
    ColorChanged { value: String, preset_name: String },

    /// Scroll-to-top control shown or hidden
    ScrollToTopVisibility { visible: bool },

    /// Page scroll position driven from the scene side (smooth scroll-to-top)
    ScrollTo { offset: f32 },

    /// A section crossed the reveal line for the first time
    SectionRevealed { section_id: String },

    /// Animated element styles for a revealing section, one per element
    RevealFrame {
        section_id: String,
        elements: Vec<ElementStyle>,
    },

    /// Error notification
    Error { code: String, message: String },
}

/// Messages from the page UI to Bevy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToBevy {
    /// Preset button pressed (index into the full preset list)
    SelectPreset { index: usize },

    /// Color input or hex text field changed; the value is not validated by the UI
    SetCarColor { value: String },

    /// Page scrolled to the given offset
    Scroll { offset: f32 },

    /// Page layout changed (section geometry)
    LayoutUpdate(PageLayoutInfo),

    /// Scroll-to-top control pressed
    ScrollToTop,

    /// Lighting settings changed
    UpdateLighting(LightingSettings),
}

impl BevyToUi {
    /// Serialize to a single JSON line
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl UiToBevy {
    /// Parse a single JSON message
    pub fn from_json(line: &str) -> Result<Self, IpcError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(IpcError::InvalidFormat("empty message".to_string()));
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}
