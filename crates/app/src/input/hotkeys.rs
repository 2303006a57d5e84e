//! Hotkey handling for the showroom
//!
//! - 1 to 6: select the matching visible color preset
//! - Home: smooth scroll back to the top

use bevy::prelude::*;
use showroom_page::PageScroll;
use showroom_scene::{CarPaint, VISIBLE_PRESETS};

/// Keys bound to the visible presets, in order
pub const PRESET_KEYS: [KeyCode; VISIBLE_PRESETS] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

pub fn handle_preset_hotkeys(key_input: Res<ButtonInput<KeyCode>>, mut paint: ResMut<CarPaint>) {
    let Some(index) = PRESET_KEYS
        .iter()
        .position(|key| key_input.just_pressed(*key))
    else {
        return;
    };

    match paint.select_preset(index) {
        Ok(preset) => info!("Selected preset {} (key {})", preset.name, index + 1),
        Err(err) => warn!("{}", err),
    }
}

pub fn handle_scroll_to_top_hotkey(
    key_input: Res<ButtonInput<KeyCode>>,
    mut scroll: ResMut<PageScroll>,
) {
    if key_input.just_pressed(KeyCode::Home) {
        scroll.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_digit_selects_preset() {
        let mut world = World::new();
        world.init_resource::<CarPaint>();
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::Digit3);
        world.insert_resource(input);

        world.run_system_once(handle_preset_hotkeys).unwrap();

        assert_eq!(world.resource::<CarPaint>().display_name(), "Glacier White");
    }

    #[test]
    fn test_no_key_leaves_paint_untouched() {
        let mut world = World::new();
        world.init_resource::<CarPaint>();
        world.init_resource::<ButtonInput<KeyCode>>();

        world.run_system_once(handle_preset_hotkeys).unwrap();

        assert_eq!(world.resource::<CarPaint>().display_name(), "Midnight Blue");
    }

    #[test]
    fn test_home_scrolls_to_top() {
        let mut world = World::new();
        let mut scroll = PageScroll::default();
        scroll.set_offset(1500.0);
        world.insert_resource(scroll);
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::Home);
        world.insert_resource(input);

        world.run_system_once(handle_scroll_to_top_hotkey).unwrap();

        assert!(world.resource::<PageScroll>().is_scrolling_to_top());
    }
}
