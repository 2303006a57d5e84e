//! Showroom scene
//!
//! This crate builds the 3D stage: camera, lights, the pedestal and the
//! turntable carrying the car model, and keeps the car's materials in sync
//! with the picked paint color.

use bevy::prelude::*;
use showroom_config::ShowroomSettings;
use showroom_ipc::BevyToUi;

mod camera;
mod color_picker;
mod lighting;
mod material_mapper;
mod material_table;
mod model;
mod pedestal;
mod turntable;

pub use camera::{spawn_camera, CameraRig, MainCamera};
pub use color_picker::{
    parse_hex, preset_infos, visible_presets, CarPaint, ColorError, PresetColor,
    CUSTOM_COLOR_NAME, PRESET_COLORS, VISIBLE_PRESETS,
};
pub use lighting::{KeyLight, LightingPlugin, SceneLighting};
pub use material_mapper::{
    apply_car_paint, plan_car_paint, remap_car_materials, CarModel, NodeItem, PaintJob,
    SurfaceParams,
};
pub use material_table::{srgb_from_hex, CarMaterialTable, MaterialSpec, MaterialTable, Paint, CAR_PARTS};
pub use model::{
    spawn_car_model, spawn_loading_placeholder, CarModelAsset, LoadOutcome, LoadingPlaceholder,
    ModelLoadState, ModelPlugin, PLACEHOLDER_SPEED,
};
pub use pedestal::{gradient_color, gradient_image, gradient_pixels, Pedestal, PedestalPlugin};
pub use turntable::{Turntable, TurntablePlugin};

/// Resource for queuing messages to send to the UI
/// The app crate drains this and forwards it over the bridge
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<BevyToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: BevyToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<BevyToUi> {
        std::mem::take(&mut self.messages)
    }
}

/// Stage group placement
const STAGE_POSITION: Vec3 = Vec3::new(4.0, 2.0, -4.0);
const STAGE_TILT_DEGREES: [f32; 3] = [8.0, -8.0, 8.0];

/// Marker for the tilted group holding the turntable and pedestal
#[derive(Component)]
pub struct Stage;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let paint = app
            .world()
            .get_resource::<ShowroomSettings>()
            .and_then(|settings| match CarPaint::new(&settings.body_color) {
                Ok(paint) => Some(paint),
                Err(err) => {
                    warn!("Ignoring configured body color: {}", err);
                    None
                }
            })
            .unwrap_or_default();

        app.init_resource::<OutboundUiMessages>()
            .init_resource::<CarMaterialTable>()
            .insert_resource(paint);

        app.add_plugins(LightingPlugin);
        app.add_plugins(TurntablePlugin);
        app.add_plugins(PedestalPlugin);
        app.add_plugins(ModelPlugin);

        app.add_systems(Startup, setup_stage);
        app.add_systems(Update, (remap_car_materials, announce_paint));
    }
}

/// Build the stage: camera, tilted group, turntable, pedestal and car
fn setup_stage(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Option<Res<ShowroomSettings>>,
    paint: Res<CarPaint>,
    mut model: ResMut<CarModelAsset>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let settings = settings.map(|s| (*s).clone()).unwrap_or_default();

    spawn_camera(&mut commands, CameraRig::default());

    let [x, y, z] = STAGE_TILT_DEGREES.map(f32::to_radians);
    let stage = commands
        .spawn((
            Transform::from_translation(STAGE_POSITION)
                .with_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z)),
            Visibility::default(),
            Name::new("Stage"),
            Stage,
        ))
        .id();

    let turntable = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Turntable::new(settings.turntable_speed),
            Name::new("Turntable"),
            ChildOf(stage),
        ))
        .id();

    pedestal::spawn_pedestal(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        paint.color(),
        stage,
    );

    model.handle = spawn_car_model(&mut commands, &asset_server, &settings.model_path, turntable);
    spawn_loading_placeholder(&mut commands, &mut meshes, &mut materials, stage);
    model.state = ModelLoadState::Loading;
    outbound.send(BevyToUi::LoadProgress { progress: 0.0 });

    info!("Stage initialized");
}

/// Tell the UI about every change to the car color
fn announce_paint(paint: Res<CarPaint>, mut outbound: ResMut<OutboundUiMessages>) {
    if !paint.is_changed() {
        return;
    }
    outbound.send(BevyToUi::ColorChanged {
        value: paint.input().to_string(),
        preset_name: paint.display_name().to_string(),
    });
}
