//! Car material remapping
//!
//! Walks the spawned car hierarchy depth-first and gives every named part a
//! fresh material built from the [`CarMaterialTable`]. A mesh entity is
//! matched by its own name first and then by the name of the nearest named,
//! non-mesh ancestor. glTF nodes spawn their primitives as child mesh
//! entities, so the node name usually lives one level up. Entities with no
//! entry keep whatever material they had.

use bevy::color::Alpha;
use bevy::light::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use crate::color_picker::CarPaint;
use crate::material_table::{CarMaterialTable, MaterialSpec, MaterialTable};

/// Marker for the root entity of the spawned car model
#[derive(Component, Debug, Default)]
pub struct CarModel;

/// Fully resolved surface values for one part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceParams {
    pub base_color: Srgba,
    pub roughness: f32,
    pub metalness: f32,
    pub transparent: bool,
    pub opacity: f32,
    pub emissive: Srgba,
    pub emissive_intensity: f32,
}

impl SurfaceParams {
    pub fn resolve(spec: &MaterialSpec, body: Srgba) -> Self {
        Self {
            base_color: spec.base_color(body),
            roughness: spec.roughness,
            metalness: spec.metalness,
            transparent: spec.transparent,
            opacity: spec.opacity,
            emissive: spec.emissive_color(),
            emissive_intensity: spec.emissive_intensity,
        }
    }

    pub fn to_standard_material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: Color::Srgba(self.base_color.with_alpha(self.opacity)),
            perceptual_roughness: self.roughness,
            metallic: self.metalness,
            alpha_mode: if self.transparent {
                AlphaMode::Blend
            } else {
                AlphaMode::Opaque
            },
            emissive: LinearRgba::from(self.emissive) * self.emissive_intensity,
            ..default()
        }
    }
}

/// A mesh entity and the surface it should get
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintJob {
    pub entity: Entity,
    pub surface: SurfaceParams,
}

/// Read-only view of a scene node
pub type NodeItem = (Option<&'static Name>, Has<Mesh3d>, Option<&'static Children>);

/// Collect a paint job for every matched mesh below `root`
pub fn plan_car_paint(
    root: Entity,
    body: Srgba,
    table: &MaterialTable,
    nodes: &Query<NodeItem>,
) -> Vec<PaintJob> {
    let mut jobs = Vec::new();
    visit(root, None, body, table, nodes, &mut jobs);
    jobs
}

fn visit<'a>(
    entity: Entity,
    group: Option<&'a str>,
    body: Srgba,
    table: &MaterialTable,
    nodes: &'a Query<NodeItem>,
    jobs: &mut Vec<PaintJob>,
) {
    let Ok((name, renderable, children)) = nodes.get(entity) else {
        return;
    };
    let name = name.map(Name::as_str);

    if renderable {
        if let Some(spec) = table.resolve(name, group) {
            jobs.push(PaintJob {
                entity,
                surface: SurfaceParams::resolve(spec, body),
            });
        }
    }

    let child_group = match (renderable, name) {
        (false, Some(name)) => Some(name),
        _ => group,
    };

    if let Some(children) = children {
        let children: &[Entity] = children;
        for &child in children {
            visit(child, child_group, body, table, nodes, jobs);
        }
    }
}

/// Replace the materials of every matched part below `root`
///
/// Returns the number of parts painted.
pub fn apply_car_paint(
    root: Entity,
    body: Srgba,
    table: &MaterialTable,
    nodes: &Query<NodeItem>,
    slots: &mut Query<&mut MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
    commands: &mut Commands,
) -> usize {
    let jobs = plan_car_paint(root, body, table, nodes);

    for job in &jobs {
        let handle = materials.add(job.surface.to_standard_material());
        if let Ok(mut slot) = slots.get_mut(job.entity) {
            slot.0 = handle;
        } else {
            commands.entity(job.entity).insert(MeshMaterial3d(handle));
        }
        commands
            .entity(job.entity)
            .remove::<(NotShadowCaster, NotShadowReceiver)>();
    }

    jobs.len()
}

/// Repaint the car when the color changes or its meshes finish spawning
pub fn remap_car_materials(
    mut commands: Commands,
    table: Res<CarMaterialTable>,
    paint: Res<CarPaint>,
    cars: Query<Entity, With<CarModel>>,
    new_meshes: Query<(), Added<Mesh3d>>,
    nodes: Query<NodeItem>,
    mut slots: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !paint.is_changed() && new_meshes.is_empty() {
        return;
    }

    for car in cars.iter() {
        let painted = apply_car_paint(
            car,
            paint.color(),
            &table.0,
            &nodes,
            &mut slots,
            &mut materials,
            &mut commands,
        );
        if painted > 0 {
            debug!("Painted {} car parts with {}", painted, paint.input());
        }
    }
}
