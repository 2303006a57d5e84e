//! Car model loading
//!
//! The glTF scene is requested at startup and spawned under the turntable
//! right away; Bevy fills the hierarchy in once the asset resolves. Until then
//! a placeholder spins on the stage. A failed load leaves the placeholder up.

use bevy::asset::RecursiveDependencyLoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use showroom_ipc::BevyToUi;

use crate::material_mapper::CarModel;
use crate::turntable::Turntable;
use crate::OutboundUiMessages;

/// Uniform scale of the car on the turntable
pub const MODEL_SCALE: f32 = 1.8;

/// Spin rate of the loading indicator in radians per second
pub const PLACEHOLDER_SPEED: f32 = 4.0;

/// Load progress of the car model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelLoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Handle and status of the car scene asset
#[derive(Resource, Debug, Default)]
pub struct CarModelAsset {
    pub handle: Handle<Scene>,
    pub state: ModelLoadState,
}

/// Marker for the loading indicator
#[derive(Component)]
pub struct LoadingPlaceholder;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CarModelAsset>()
            .add_systems(Update, track_model_load);
    }
}

/// Request the car scene and spawn it under `parent`
pub fn spawn_car_model(
    commands: &mut Commands,
    asset_server: &AssetServer,
    path: &str,
    parent: Entity,
) -> Handle<Scene> {
    let handle: Handle<Scene> = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string()));

    commands.spawn((
        SceneRoot(handle.clone()),
        Transform::from_xyz(0.0, 0.0, 1.0).with_scale(Vec3::splat(MODEL_SCALE)),
        Name::new("CarModel"),
        CarModel,
        ChildOf(parent),
    ));

    info!("Loading car model from {}", path);
    handle
}

/// Spawn the spinning loading indicator under `parent`.
///
/// The parent must not rotate on its own, or the spins add up.
pub fn spawn_loading_placeholder(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    parent: Entity,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(0.6, 0.6, 0.6))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                emissive: LinearRgba::rgb(0.6, 0.6, 0.6),
                unlit: true,
                ..default()
            })),
            Transform::from_xyz(0.0, 1.0, 0.0),
            Turntable::new(PLACEHOLDER_SPEED),
            Name::new("LoadingPlaceholder"),
            LoadingPlaceholder,
            ChildOf(parent),
        ))
        .id()
}

/// Terminal result of the car scene load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed(String),
}

impl LoadOutcome {
    /// `None` while the scene or any of its dependencies is still pending
    pub fn from_state(state: &RecursiveDependencyLoadState) -> Option<Self> {
        match state {
            RecursiveDependencyLoadState::Loaded => Some(Self::Loaded),
            RecursiveDependencyLoadState::Failed(err) => Some(Self::Failed(err.to_string())),
            _ => None,
        }
    }
}

/// Swap the placeholder for the model once the scene and its textures resolve
fn track_model_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut model: ResMut<CarModelAsset>,
    placeholders: Query<Entity, With<LoadingPlaceholder>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if model.state != ModelLoadState::Loading {
        return;
    }

    let Some(outcome) = asset_server
        .get_recursive_dependency_load_state(model.handle.id())
        .as_ref()
        .and_then(LoadOutcome::from_state)
    else {
        return;
    };

    finish_model_load(outcome, &mut commands, &mut model, &placeholders, &mut outbound);
}

fn finish_model_load(
    outcome: LoadOutcome,
    commands: &mut Commands,
    model: &mut CarModelAsset,
    placeholders: &Query<Entity, With<LoadingPlaceholder>>,
    outbound: &mut OutboundUiMessages,
) {
    match outcome {
        LoadOutcome::Loaded => {
            for entity in placeholders.iter() {
                commands.entity(entity).despawn();
            }
            model.state = ModelLoadState::Ready;
            outbound.send(BevyToUi::LoadProgress { progress: 100.0 });
            outbound.send(BevyToUi::ModelLoaded);
            info!("Car model loaded");
        }
        LoadOutcome::Failed(message) => {
            model.state = ModelLoadState::Failed;
            error!("Car model failed to load: {}", message);
            outbound.send(BevyToUi::Error {
                code: "model_load_failed".to_string(),
                message,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    fn setup() -> (World, Entity, Entity) {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<CarModelAsset>();
        world.init_resource::<OutboundUiMessages>();

        let stage = world.spawn((Transform::default(), Name::new("Stage"))).id();
        let placeholder = world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    spawn_loading_placeholder(&mut commands, &mut meshes, &mut materials, stage)
                },
            )
            .unwrap();
        (world, stage, placeholder)
    }

    fn finish(world: &mut World, outcome: LoadOutcome) {
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut model: ResMut<CarModelAsset>,
                      placeholders: Query<Entity, With<LoadingPlaceholder>>,
                      mut outbound: ResMut<OutboundUiMessages>| {
                    finish_model_load(
                        outcome.clone(),
                        &mut commands,
                        &mut model,
                        &placeholders,
                        &mut outbound,
                    );
                },
            )
            .unwrap();
    }

    #[test]
    fn test_placeholder_spins_on_its_own() {
        let (world, stage, placeholder) = setup();

        assert_eq!(world.get::<ChildOf>(placeholder).unwrap().parent(), stage);
        assert!(world.get::<Turntable>(stage).is_none());
        assert_eq!(world.get::<Turntable>(placeholder).unwrap().speed, PLACEHOLDER_SPEED);
    }

    #[test]
    fn test_pending_states_have_no_outcome() {
        assert_eq!(LoadOutcome::from_state(&RecursiveDependencyLoadState::NotLoaded), None);
        assert_eq!(LoadOutcome::from_state(&RecursiveDependencyLoadState::Loading), None);
        assert_eq!(
            LoadOutcome::from_state(&RecursiveDependencyLoadState::Loaded),
            Some(LoadOutcome::Loaded)
        );
    }

    #[test]
    fn test_loaded_removes_placeholder() {
        let (mut world, _, placeholder) = setup();
        finish(&mut world, LoadOutcome::Loaded);

        assert!(world.get_entity(placeholder).is_err());
        assert_eq!(world.resource::<CarModelAsset>().state, ModelLoadState::Ready);
        let sent = world.resource_mut::<OutboundUiMessages>().drain();
        assert_eq!(
            sent,
            vec![BevyToUi::LoadProgress { progress: 100.0 }, BevyToUi::ModelLoaded]
        );
    }

    #[test]
    fn test_failed_keeps_placeholder() {
        let (mut world, _, placeholder) = setup();
        finish(&mut world, LoadOutcome::Failed("no such file: Audi.glb".to_string()));

        assert!(world.get::<LoadingPlaceholder>(placeholder).is_some());
        assert_eq!(world.resource::<CarModelAsset>().state, ModelLoadState::Failed);
        let sent = world.resource_mut::<OutboundUiMessages>().drain();
        assert_eq!(
            sent,
            vec![BevyToUi::Error {
                code: "model_load_failed".to_string(),
                message: "no such file: Audi.glb".to_string(),
            }]
        );
    }
}
