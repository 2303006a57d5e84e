//! Input handling
//!
//! Keyboard shortcuts for the color presets and scroll-to-top, and mouse
//! wheel scrolling when no page UI drives the scroll position.

use bevy::input::InputSystems;
use bevy::prelude::*;

mod hotkeys;
mod mouse;

pub use hotkeys::{handle_preset_hotkeys, handle_scroll_to_top_hotkey, PRESET_KEYS};
pub use mouse::{scroll_page_with_wheel, wheel_pixels};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (
                handle_preset_hotkeys,
                handle_scroll_to_top_hotkey,
                scroll_page_with_wheel,
            )
                .after(InputSystems),
        );

        info!("Input plugin initialized");
    }
}
