//! Showroom - Bevy car showroom driven by a page UI

use bevy::prelude::*;
use bevy::window::WindowResolution;
use showroom_config::{DisplayConfig, ShowroomSettings};

mod bridge;
mod config;
mod input;
mod ipc_handler;
mod page;

use config::ShowroomConfig;
use showroom_scene::ScenePlugin;

fn main() {
    let config = ShowroomConfig::default();
    let settings = ShowroomSettings::from_env();

    info!(
        "Starting Showroom with {:?} bridge, model {}",
        config.bridge_mode, settings.model_path
    );

    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: "Showroom".into(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let mut app = App::new();

    // ScenePlugin and PagePlugin read settings while building
    app.insert_resource(config)
        .insert_resource(display_config)
        .insert_resource(settings);

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    app.add_plugins(bridge::BridgePlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(page::PagePlugin)
        .add_plugins(input::InputPlugin)
        .add_systems(PreUpdate, ipc_handler::handle_ui_to_bevy_messages)
        .run();
}
