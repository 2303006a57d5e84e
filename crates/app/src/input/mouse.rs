//! Mouse wheel scrolling

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use showroom_config::ShowroomSettings;
use showroom_ipc::BevyToUi;
use showroom_page::{PageLayout, PageScroll};
use showroom_scene::OutboundUiMessages;

/// Wheel movement in pixels; positive wheel y scrolls up
pub fn wheel_pixels(unit: MouseScrollUnit, y: f32, line_height: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y * line_height,
        MouseScrollUnit::Pixel => y,
    }
}

/// Scroll the page with the wheel and tell the UI where it landed
pub fn scroll_page_with_wheel(
    mut wheel_events: MessageReader<MouseWheel>,
    settings: Res<ShowroomSettings>,
    layout: Res<PageLayout>,
    mut scroll: ResMut<PageScroll>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let delta: f32 = wheel_events
        .read()
        .map(|event| -wheel_pixels(event.unit, event.y, settings.scroll_line_height))
        .sum();
    if delta == 0.0 {
        return;
    }

    scroll.scroll_by(delta, layout.max_scroll());
    outbound.send(BevyToUi::ScrollTo {
        offset: scroll.offset(),
    });
}
