//! Pedestal under the car with a gradient keyed to the car color
//!
//! The gradient is a 1x256 texture: the top rows are left zeroed, which the
//! opaque material draws black, then a vertical blend from dark gray
//! (stop 0.5) to the car color (stop 0.8).

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::color_picker::CarPaint;

/// Gradient texture height in pixels
pub const GRADIENT_HEIGHT: u32 = 256;

/// Rows left unfilled at the top of the gradient
pub const GRADIENT_TOP_MARGIN: u32 = 10;

const DARK_STOP: f32 = 0.5;
const CAR_STOP: f32 = 0.8;
const DARK_GRAY: Srgba = Srgba::new(0x1a as f32 / 255.0, 0x1a as f32 / 255.0, 0x1a as f32 / 255.0, 1.0);

/// Pedestal disc radius
pub const PEDESTAL_RADIUS: f32 = 5.0;

/// Emissive strength of the car color on the pedestal
pub const PEDESTAL_GLOW: f32 = 0.2;

/// Marker for the pedestal entity
#[derive(Component)]
pub struct Pedestal;

/// Color of the gradient at `t` in `[0, 1]`, interpolated in sRGB
pub fn gradient_color(car: Srgba, t: f32) -> Srgba {
    if t <= DARK_STOP {
        DARK_GRAY
    } else if t >= CAR_STOP {
        car
    } else {
        let f = (t - DARK_STOP) / (CAR_STOP - DARK_STOP);
        Srgba::new(
            DARK_GRAY.red + (car.red - DARK_GRAY.red) * f,
            DARK_GRAY.green + (car.green - DARK_GRAY.green) * f,
            DARK_GRAY.blue + (car.blue - DARK_GRAY.blue) * f,
            DARK_GRAY.alpha + (car.alpha - DARK_GRAY.alpha) * f,
        )
    }
}

/// RGBA8 rows of the gradient, top row first
pub fn gradient_pixels(car: Srgba) -> Vec<[u8; 4]> {
    (0..GRADIENT_HEIGHT)
        .map(|row| {
            if row < GRADIENT_TOP_MARGIN {
                return [0, 0, 0, 0];
            }
            let t = (row as f32 + 0.5) / GRADIENT_HEIGHT as f32;
            let color = gradient_color(car, t);
            [
                to_byte(color.red),
                to_byte(color.green),
                to_byte(color.blue),
                to_byte(color.alpha),
            ]
        })
        .collect()
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Build the gradient as a texture
pub fn gradient_image(car: Srgba) -> Image {
    let pixels = gradient_pixels(car);
    Image::new(
        Extent3d {
            width: 1,
            height: GRADIENT_HEIGHT,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        bytemuck::cast_slice(&pixels).to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::all(),
    )
}

/// Pedestal material for a car color
pub fn pedestal_material(car: Srgba, texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 0.1,
        metallic: 0.3,
        alpha_mode: AlphaMode::Opaque,
        emissive: LinearRgba::from(car) * PEDESTAL_GLOW,
        ..default()
    }
}

/// Spawn the pedestal disc as a child of `parent`
pub fn spawn_pedestal(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    car: Srgba,
    parent: Entity,
) -> Entity {
    let texture = images.add(gradient_image(car));
    commands
        .spawn((
            Mesh3d(meshes.add(Circle::new(PEDESTAL_RADIUS).mesh().resolution(64))),
            MeshMaterial3d(materials.add(pedestal_material(car, texture))),
            Transform::from_xyz(0.0, -0.1, 0.0)
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            Name::new("Pedestal"),
            Pedestal,
            ChildOf(parent),
        ))
        .id()
}

pub struct PedestalPlugin;

impl Plugin for PedestalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, retint_pedestal);
    }
}

/// Regenerate the gradient when the car color changes
fn retint_pedestal(
    paint: Res<CarPaint>,
    pedestals: Query<&MeshMaterial3d<StandardMaterial>, With<Pedestal>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    if !paint.is_changed() {
        return;
    }

    let car = paint.color();
    for slot in pedestals.iter() {
        let texture = images.add(gradient_image(car));
        if let Some(mut material) = materials.get_mut(&slot.0) {
            *material = pedestal_material(car, texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_rows_transparent() {
        let pixels = gradient_pixels(Srgba::WHITE);
        assert_eq!(pixels.len(), GRADIENT_HEIGHT as usize);
        for row in 0..GRADIENT_TOP_MARGIN as usize {
            assert_eq!(pixels[row], [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_gradient_stops() {
        let red = Srgba::rgb(1.0, 0.0, 0.0);
        let pixels = gradient_pixels(red);
        // above the dark stop
        assert_eq!(pixels[20], [0x1a, 0x1a, 0x1a, 255]);
        assert_eq!(pixels[127], [0x1a, 0x1a, 0x1a, 255]);
        // past the car stop
        assert_eq!(pixels[210], [255, 0, 0, 255]);
        assert_eq!(pixels[255], [255, 0, 0, 255]);
    }

    #[test]
    fn test_gradient_blends_between_stops() {
        let white = Srgba::WHITE;
        let mid = gradient_color(white, 0.65);
        let expected = (0x1a as f32 / 255.0 + 1.0) / 2.0;
        assert!((mid.red - expected).abs() < 1e-4);

        let pixels = gradient_pixels(white);
        for pair in pixels[128..205].windows(2) {
            assert!(pair[1][0] >= pair[0][0]);
        }
    }

    #[test]
    fn test_pedestal_is_opaque() {
        let material = pedestal_material(Srgba::WHITE, Handle::default());
        // transparent texel rows render dark rather than see-through
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert_eq!(material.emissive, LinearRgba::from(Srgba::WHITE) * PEDESTAL_GLOW);
    }

    #[test]
    fn test_gradient_image_size() {
        let image = gradient_image(Srgba::BLACK);
        assert_eq!(image.width(), 1);
        assert_eq!(image.height(), GRADIENT_HEIGHT);
    }
}
