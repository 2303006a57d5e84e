//! IPC message handling between the page UI and Bevy.

use std::fmt::Display;

use bevy::prelude::*;
use showroom_ipc::{BevyToUi, UiToBevy};
use showroom_page::{PageLayout, PageScroll};
use showroom_scene::{CarPaint, OutboundUiMessages, SceneLighting};

use crate::bridge::UiBridge;

/// Drain messages from the UI and dispatch each to the resource it drives.
pub fn handle_ui_to_bevy_messages(world: &mut World) {
    let messages = match world.get_resource::<UiBridge>() {
        Some(bridge) => bridge.try_recv_all(),
        None => return,
    };

    for msg in messages {
        dispatch(world, msg);
    }
}

pub fn dispatch(world: &mut World, msg: UiToBevy) {
    match msg {
        UiToBevy::SelectPreset { index } => {
            let result = world
                .get_resource_mut::<CarPaint>()
                .map(|mut paint| paint.select_preset(index));
            match result {
                Some(Ok(preset)) => info!("Selected preset {}", preset.name),
                Some(Err(err)) => report_error(world, "unknown_preset", err),
                None => warn!("SelectPreset received before the scene was ready"),
            }
        }
        UiToBevy::SetCarColor { value } => {
            let result = world
                .get_resource_mut::<CarPaint>()
                .map(|mut paint| paint.set_input(&value));
            match result {
                Some(Ok(_)) => debug!("Car color set to {}", value),
                Some(Err(err)) => report_error(world, "invalid_color", err),
                None => warn!("SetCarColor received before the scene was ready"),
            }
        }
        UiToBevy::Scroll { offset } => {
            if let Some(mut scroll) = world.get_resource_mut::<PageScroll>() {
                scroll.set_offset(offset);
            }
        }
        UiToBevy::LayoutUpdate(info) => {
            debug!(
                "Page layout updated: {} sections, viewport {}",
                info.sections.len(),
                info.viewport_height
            );
            world.insert_resource(PageLayout::from_info(info));
        }
        UiToBevy::ScrollToTop => {
            if let Some(mut scroll) = world.get_resource_mut::<PageScroll>() {
                scroll.scroll_to_top();
            }
        }
        UiToBevy::UpdateLighting(settings) => {
            if let Some(mut lighting) = world.get_resource_mut::<SceneLighting>() {
                lighting.update(settings);
                info!("Updated lighting settings from UI");
            }
        }
    }
}

fn report_error(world: &mut World, code: &str, err: impl Display) {
    warn!("{}: {}", code, err);
    if let Some(mut outbound) = world.get_resource_mut::<OutboundUiMessages>() {
        outbound.send(BevyToUi::Error {
            code: code.to_string(),
            message: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_ipc::{LightingSettings, PageLayoutInfo, SectionBounds};

    fn world() -> World {
        let mut world = World::new();
        world.init_resource::<CarPaint>();
        world.init_resource::<OutboundUiMessages>();
        world.init_resource::<PageScroll>();
        world.init_resource::<PageLayout>();
        world.init_resource::<SceneLighting>();
        world
    }

    #[test]
    fn test_select_preset() {
        let mut world = world();
        dispatch(&mut world, UiToBevy::SelectPreset { index: 1 });
        assert_eq!(world.resource::<CarPaint>().display_name(), "Tango Red");
        assert!(world.resource::<OutboundUiMessages>().messages.is_empty());
    }

    #[test]
    fn test_unknown_preset_reports_error() {
        let mut world = world();
        dispatch(&mut world, UiToBevy::SelectPreset { index: 99 });
        let messages = &world.resource::<OutboundUiMessages>().messages;
        assert!(matches!(
            &messages[..],
            [BevyToUi::Error { code, .. }] if code == "unknown_preset"
        ));
    }

    #[test]
    fn test_invalid_color_keeps_rendered_color() {
        let mut world = world();
        let before = world.resource::<CarPaint>().color();

        dispatch(
            &mut world,
            UiToBevy::SetCarColor {
                value: "#12".to_string(),
            },
        );

        let paint = world.resource::<CarPaint>();
        assert_eq!(paint.color(), before);
        assert_eq!(paint.input(), "#12");
        let messages = &world.resource::<OutboundUiMessages>().messages;
        assert!(matches!(
            &messages[..],
            [BevyToUi::Error { code, .. }] if code == "invalid_color"
        ));
    }

    #[test]
    fn test_custom_color() {
        let mut world = world();
        dispatch(
            &mut world,
            UiToBevy::SetCarColor {
                value: "#336699".to_string(),
            },
        );
        let paint = world.resource::<CarPaint>();
        assert_eq!(paint.color(), Srgba::hex("#336699").unwrap());
        assert_eq!(paint.display_name(), "Custom");
    }

    #[test]
    fn test_scroll_then_scroll_to_top() {
        let mut world = world();
        dispatch(&mut world, UiToBevy::Scroll { offset: 1200.0 });
        assert!(world.resource::<PageScroll>().is_top_button_visible());

        dispatch(&mut world, UiToBevy::ScrollToTop);
        assert!(world.resource::<PageScroll>().is_scrolling_to_top());
    }

    #[test]
    fn test_layout_update_replaces_layout() {
        let mut world = world();
        dispatch(
            &mut world,
            UiToBevy::LayoutUpdate(PageLayoutInfo {
                viewport_height: 600.0,
                sections: vec![SectionBounds {
                    id: "story".to_string(),
                    top: 1800.0,
                    height: 600.0,
                }],
            }),
        );
        let layout = world.resource::<PageLayout>();
        assert_eq!(layout.viewport_height(), 600.0);
        assert_eq!(layout.sections().len(), 1);
    }

    #[test]
    fn test_update_lighting_marks_dirty() {
        let mut world = world();
        let settings = LightingSettings {
            sun_illuminance: 5000.0,
            ..Default::default()
        };
        dispatch(&mut world, UiToBevy::UpdateLighting(settings));
        let lighting = world.resource::<SceneLighting>();
        assert!(lighting.dirty);
        assert_eq!(lighting.settings.sun_illuminance, 5000.0);
    }
}
