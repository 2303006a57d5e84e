//! Configurable stage lighting
//!
//! One shadow-casting directional light plus global ambient fill. Settings
//! arrive over IPC and are applied on the next frame.

use bevy::light::{DirectionalLightShadowMap, GlobalAmbientLight};
use bevy::prelude::*;
use showroom_ipc::LightingSettings;

/// Marker component for the key directional light
#[derive(Component)]
pub struct KeyLight;

/// Resource for current lighting settings
#[derive(Resource)]
pub struct SceneLighting {
    /// Current lighting configuration
    pub settings: LightingSettings,
    /// Flag indicating settings have changed and need to be applied
    pub dirty: bool,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            settings: LightingSettings::default(),
            dirty: false, // setup_lighting applies the defaults
        }
    }
}

impl SceneLighting {
    /// Update settings and mark as dirty
    pub fn update(&mut self, settings: LightingSettings) {
        self.settings = settings;
        self.dirty = true;
    }
}

/// Plugin for configurable stage lighting
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneLighting>()
            .add_systems(Startup, setup_lighting)
            .add_systems(Update, update_lighting);
    }
}

fn rgb(color: [f32; 3]) -> Color {
    Color::srgb(color[0], color[1], color[2])
}

fn key_light_transform(settings: &LightingSettings) -> Transform {
    Transform::from_translation(Vec3::from_array(settings.sun_position)).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Spawn the key light and set ambient fill
fn setup_lighting(mut commands: Commands, lighting: Res<SceneLighting>) {
    let settings = &lighting.settings;

    commands.spawn((
        DirectionalLight {
            illuminance: settings.sun_illuminance,
            color: rgb(settings.sun_color),
            shadows_enabled: true,
            ..default()
        },
        key_light_transform(settings),
        KeyLight,
    ));

    commands.insert_resource(DirectionalLightShadowMap {
        size: settings.shadow_map_size,
    });

    // Global ambient light is a resource, not an entity
    commands.insert_resource(GlobalAmbientLight {
        color: rgb(settings.ambient_color),
        brightness: settings.ambient_brightness,
        ..default()
    });

    info!("Stage lighting initialized");
}

/// Update lighting when settings change
fn update_lighting(
    mut lighting: ResMut<SceneLighting>,
    mut key_query: Query<(&mut DirectionalLight, &mut Transform), With<KeyLight>>,
    mut ambient_light: ResMut<GlobalAmbientLight>,
    mut shadow_map: ResMut<DirectionalLightShadowMap>,
) {
    if !lighting.dirty {
        return;
    }

    let settings = &lighting.settings;

    for (mut light, mut transform) in key_query.iter_mut() {
        light.illuminance = settings.sun_illuminance;
        light.color = rgb(settings.sun_color);
        *transform = key_light_transform(settings);
    }

    ambient_light.color = rgb(settings.ambient_color);
    ambient_light.brightness = settings.ambient_brightness;
    shadow_map.size = settings.shadow_map_size;

    lighting.dirty = false;
    info!("Stage lighting updated");
}
