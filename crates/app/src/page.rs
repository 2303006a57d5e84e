//! Page-side systems: scroll-to-top, section reveals and the initial UI sync

use bevy::prelude::*;
use showroom_config::{DisplayConfig, ShowroomSettings};
use showroom_ipc::BevyToUi;
use showroom_page::{
    hero_intro, navbar_intro, page_content, reveal_timeline, revealed_section_ids, section_infos,
    PageLayout, PageScroll, RevealAnimations, ScrollRevealSequencer, HOME_SECTION, NAVBAR_ID,
};
use showroom_scene::{preset_infos, CarPaint, OutboundUiMessages};

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<ShowroomSettings>()
            .cloned()
            .unwrap_or_default();
        let display = app
            .world()
            .get_resource::<DisplayConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(PageScroll::new(settings.scroll_to_top_threshold))
            .insert_resource(ScrollRevealSequencer::new(
                revealed_section_ids(),
                settings.reveal_viewport_fraction,
            ))
            .insert_resource(PageLayout::for_display(&display))
            .init_resource::<RevealAnimations>()
            .init_resource::<OutboundUiMessages>()
            .add_systems(Startup, initialize_page)
            .add_systems(
                Update,
                (
                    tick_scroll_to_top,
                    trigger_reveals,
                    play_reveals,
                    track_scroll_to_top_button,
                )
                    .chain(),
            );
    }
}

/// Sync presets, color, sections and page copy to the UI and start the intro animations
fn initialize_page(
    paint: Res<CarPaint>,
    mut animations: ResMut<RevealAnimations>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    outbound.send(BevyToUi::Initialize {
        presets: preset_infos(),
        color: paint.input().to_string(),
        sections: section_infos(),
        content: page_content(),
    });
    animations.start(NAVBAR_ID, navbar_intro());
    animations.start(HOME_SECTION, hero_intro());
}

fn tick_scroll_to_top(
    time: Res<Time>,
    mut scroll: ResMut<PageScroll>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if !scroll.is_scrolling_to_top() {
        return;
    }
    if let Some(offset) = scroll.tick(time.delta_secs()) {
        outbound.send(BevyToUi::ScrollTo { offset });
    }
}

pub fn trigger_reveals(
    scroll: Res<PageScroll>,
    layout: Res<PageLayout>,
    mut sequencer: ResMut<ScrollRevealSequencer>,
    mut animations: ResMut<RevealAnimations>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if !scroll.is_changed() && !layout.is_changed() {
        return;
    }
    for section_id in sequencer.update(scroll.offset(), &layout) {
        animations.start(section_id.clone(), reveal_timeline(&section_id));
        outbound.send(BevyToUi::SectionRevealed { section_id });
    }
}

pub fn play_reveals(
    time: Res<Time>,
    mut animations: ResMut<RevealAnimations>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if animations.is_empty() {
        return;
    }
    for frame in animations.tick(time.delta_secs()) {
        outbound.send(BevyToUi::RevealFrame {
            section_id: frame.section_id,
            elements: frame.elements,
        });
    }
}

/// Send the control's visibility whenever it flips
pub fn track_scroll_to_top_button(
    scroll: Res<PageScroll>,
    mut shown: Local<Option<bool>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let visible = scroll.is_top_button_visible();
    if *shown != Some(visible) {
        *shown = Some(visible);
        outbound.send(BevyToUi::ScrollToTopVisibility { visible });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(PageScroll::new(300.0));
        world.insert_resource(PageLayout::standard(1000.0));
        world.init_resource::<ScrollRevealSequencer>();
        world.init_resource::<RevealAnimations>();
        world.init_resource::<OutboundUiMessages>();
        world
    }

    fn take(world: &mut World) -> Vec<BevyToUi> {
        world.resource_mut::<OutboundUiMessages>().drain()
    }

    #[test]
    fn test_layout_follows_display_config() {
        let mut app = App::new();
        app.insert_resource(DisplayConfig {
            width: 1280,
            height: 720,
        });
        app.add_plugins(PagePlugin);

        let layout = app.world().resource::<PageLayout>();
        assert_eq!(layout.viewport_height(), 720.0);
        assert_eq!(layout.section("footer").unwrap().top, 2880.0);
    }

    #[test]
    fn test_initialize_sends_page_content() {
        let mut world = world();
        world.init_resource::<CarPaint>();
        world.run_system_once(initialize_page).unwrap();

        let messages = take(&mut world);
        let [BevyToUi::Initialize {
            presets,
            color,
            sections,
            content,
        }] = &messages[..]
        else {
            panic!("expected a single Initialize, got {messages:?}");
        };
        assert_eq!(presets, &preset_infos());
        assert_eq!(color, "#1a1a2e");
        assert_eq!(sections.len(), 4);
        assert_eq!(content, &page_content());
        assert_eq!(content.hero.title, "Audi R8");
        assert!(!world.resource::<RevealAnimations>().is_empty());
    }

    #[test]
    fn test_reveal_fires_once_on_scroll() {
        let mut world = world();
        world.run_system_once(trigger_reveals).unwrap();
        assert!(take(&mut world).is_empty());

        world.resource_mut::<PageScroll>().set_offset(250.0);
        world.run_system_once(trigger_reveals).unwrap();
        assert_eq!(
            take(&mut world),
            vec![BevyToUi::SectionRevealed {
                section_id: "performance".to_string()
            }]
        );
        assert!(!world.resource::<RevealAnimations>().is_empty());

        world.resource_mut::<PageScroll>().set_offset(0.0);
        world.run_system_once(trigger_reveals).unwrap();
        world.resource_mut::<PageScroll>().set_offset(250.0);
        world.run_system_once(trigger_reveals).unwrap();
        assert!(take(&mut world).is_empty());
    }

    #[test]
    fn test_reveal_frames_until_finished() {
        let mut world = world();
        world.init_resource::<Time>();
        world
            .resource_mut::<RevealAnimations>()
            .start("story", reveal_timeline("story"));

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(5));
        world.run_system_once(play_reveals).unwrap();

        let messages = take(&mut world);
        assert!(matches!(
            &messages[..],
            [BevyToUi::RevealFrame { section_id, elements }]
                if section_id == "story" && elements.len() == 2
        ));
        assert!(world.resource::<RevealAnimations>().is_empty());
    }

    #[test]
    fn test_visibility_sent_on_change_only() {
        let mut world = world();
        let mut schedule = Schedule::default();
        schedule.add_systems(track_scroll_to_top_button);

        schedule.run(&mut world);
        assert_eq!(
            take(&mut world),
            vec![BevyToUi::ScrollToTopVisibility { visible: false }]
        );

        world.resource_mut::<PageScroll>().set_offset(300.0);
        schedule.run(&mut world);
        assert!(take(&mut world).is_empty());

        world.resource_mut::<PageScroll>().set_offset(301.0);
        schedule.run(&mut world);
        assert_eq!(
            take(&mut world),
            vec![BevyToUi::ScrollToTopVisibility { visible: true }]
        );
    }

    #[test]
    fn test_smooth_scroll_emits_offsets() {
        let mut world = world();
        world.init_resource::<Time>();
        world.resource_mut::<PageScroll>().set_offset(900.0);
        world.resource_mut::<PageScroll>().scroll_to_top();

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        world.run_system_once(tick_scroll_to_top).unwrap();

        assert_eq!(take(&mut world), vec![BevyToUi::ScrollTo { offset: 0.0 }]);
    }
}
