//! Car paint color and preset picker
//!
//! The current body color lives in the [`CarPaint`] resource. It is written by
//! preset buttons and by the free-text/native color inputs, and read by the
//! material mapper and the pedestal gradient.

use bevy::color::HexColorError;
use bevy::prelude::*;
use showroom_ipc::PresetInfo;

/// Label shown when the current color matches no preset
pub const CUSTOM_COLOR_NAME: &str = "Custom";

/// Number of presets shown as buttons
pub const VISIBLE_PRESETS: usize = 6;

/// A named, fixed color choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// All presets in display order
pub const PRESET_COLORS: &[PresetColor] = &[
    PresetColor { name: "Midnight Blue", value: "#1a1a2e" },
    PresetColor { name: "Tango Red", value: "#c8102e" },
    PresetColor { name: "Glacier White", value: "#f2f2f2" },
    PresetColor { name: "Mythos Black", value: "#0b0b0b" },
    PresetColor { name: "Nardo Gray", value: "#7a7d80" },
    PresetColor { name: "Ara Blue", value: "#1f4e9c" },
    PresetColor { name: "Vegas Yellow", value: "#f2c500" },
    PresetColor { name: "Kemora Gray", value: "#4b5a52" },
];

/// Presets offered as buttons
pub fn visible_presets() -> &'static [PresetColor] {
    &PRESET_COLORS[..VISIBLE_PRESETS.min(PRESET_COLORS.len())]
}

/// Presets in wire form
pub fn preset_infos() -> Vec<PresetInfo> {
    PRESET_COLORS
        .iter()
        .map(|preset| PresetInfo {
            name: preset.name.to_string(),
            value: preset.value.to_string(),
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: HexColorError,
    },

    #[error("no preset at index {0}")]
    UnknownPreset(usize),
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
pub fn parse_hex(input: &str) -> Result<Srgba, ColorError> {
    Srgba::hex(input.trim()).map_err(|source| ColorError::InvalidHex {
        input: input.to_string(),
        source,
    })
}

/// The user's car color
///
/// `input` is what the text field shows; `color` is the last input that
/// parsed. Malformed input is kept for display but never rendered.
#[derive(Resource, Debug, Clone)]
pub struct CarPaint {
    input: String,
    color: Srgba,
}

impl Default for CarPaint {
    fn default() -> Self {
        Self {
            input: showroom_config::DEFAULT_BODY_COLOR.to_string(),
            color: Srgba::rgb_u8(0x1a, 0x1a, 0x2e),
        }
    }
}

impl CarPaint {
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        Ok(Self {
            input: hex.to_string(),
            color: parse_hex(hex)?,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn color(&self) -> Srgba {
        self.color
    }

    /// Store typed text; the rendered color only changes if it parses
    pub fn set_input(&mut self, text: &str) -> Result<Srgba, ColorError> {
        self.input = text.to_string();
        let color = parse_hex(text)?;
        self.color = color;
        Ok(color)
    }

    pub fn select_preset(&mut self, index: usize) -> Result<&'static PresetColor, ColorError> {
        let preset = PRESET_COLORS
            .get(index)
            .ok_or(ColorError::UnknownPreset(index))?;
        self.set_input(preset.value)?;
        Ok(preset)
    }

    /// Preset whose value equals the current input, ignoring case
    pub fn preset(&self) -> Option<&'static PresetColor> {
        let input = self.input.trim();
        PRESET_COLORS
            .iter()
            .find(|preset| preset.value.eq_ignore_ascii_case(input))
    }

    pub fn is_selected(&self, preset: &PresetColor) -> bool {
        self.preset().is_some_and(|current| current == preset)
    }

    pub fn display_name(&self) -> &'static str {
        self.preset().map_or(CUSTOM_COLOR_NAME, |preset| preset.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_midnight_blue() {
        let paint = CarPaint::default();
        assert_eq!(paint.input(), "#1a1a2e");
        assert_eq!(paint.color(), parse_hex("#1a1a2e").unwrap());
        assert_eq!(paint.display_name(), "Midnight Blue");
    }

    #[test]
    fn test_select_preset() {
        let mut paint = CarPaint::default();
        let preset = paint.select_preset(1).unwrap();
        assert_eq!(preset.name, "Tango Red");
        assert_eq!(paint.input(), "#c8102e");
        assert!(paint.is_selected(&PRESET_COLORS[1]));
        assert!(!paint.is_selected(&PRESET_COLORS[0]));
    }

    #[test]
    fn test_unknown_preset_keeps_color() {
        let mut paint = CarPaint::default();
        let before = paint.color();
        assert!(matches!(
            paint.select_preset(PRESET_COLORS.len()),
            Err(ColorError::UnknownPreset(_))
        ));
        assert_eq!(paint.color(), before);
    }

    #[test]
    fn test_custom_input() {
        let mut paint = CarPaint::default();
        let color = paint.set_input("#FF0000").unwrap();
        assert_eq!(color, Srgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(paint.display_name(), CUSTOM_COLOR_NAME);
    }

    #[test]
    fn test_preset_match_ignores_case() {
        let mut paint = CarPaint::default();
        paint.set_input("#1A1A2E").unwrap();
        assert_eq!(paint.display_name(), "Midnight Blue");
    }

    #[test]
    fn test_partial_input_is_shown_but_not_rendered() {
        let mut paint = CarPaint::default();
        paint.set_input("#ff0000").unwrap();
        let err = paint.set_input("#ff00").unwrap_err();
        assert!(matches!(err, ColorError::InvalidHex { .. }));
        assert_eq!(paint.input(), "#ff00");
        assert_eq!(paint.color(), Srgba::rgb(1.0, 0.0, 0.0));

        assert!(paint.set_input("not a color").is_err());
        assert_eq!(paint.color(), Srgba::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_short_hex_forms() {
        assert_eq!(parse_hex("fff").unwrap(), Srgba::WHITE);
        assert_eq!(parse_hex(" #000 ").unwrap(), Srgba::BLACK);
    }

    #[test]
    fn test_visible_presets() {
        assert_eq!(visible_presets().len(), 6);
        assert_eq!(visible_presets()[0], PRESET_COLORS[0]);
        assert_eq!(preset_infos().len(), PRESET_COLORS.len());
    }
}
