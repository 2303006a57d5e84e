//! Fixed showroom camera with optional bloom

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

#[cfg(feature = "bloom")]
use bevy::post_process::bloom::{Bloom, BloomPrefilter};

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Where the camera sits and what it looks at
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(8.0, 6.0, 6.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
        }
    }
}

impl CameraRig {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov_degrees.to_radians(),
            ..default()
        })
    }
}

/// Bloom tuned so only the lights and bright chrome glow
#[cfg(feature = "bloom")]
pub fn showroom_bloom() -> Bloom {
    Bloom {
        intensity: 0.5,
        prefilter: BloomPrefilter {
            threshold: 0.6,
            threshold_softness: 0.9,
        },
        ..Bloom::NATURAL
    }
}

/// Spawn the main camera
pub fn spawn_camera(commands: &mut Commands, rig: CameraRig) -> Entity {
    // Reinhard avoids the tonemapping LUTs, which need zstd
    #[allow(unused_mut)]
    let mut camera = commands.spawn((
        Camera3d::default(),
        rig.projection(),
        rig.transform(),
        Tonemapping::Reinhard,
        MainCamera,
    ));

    #[cfg(feature = "bloom")]
    camera.insert(showroom_bloom());

    camera.id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig() {
        let rig = CameraRig::default();
        let transform = rig.transform();
        assert_eq!(transform.translation, Vec3::new(8.0, 6.0, 6.0));
        let forward = transform.forward();
        assert!(forward.dot(-rig.position.normalize()) > 0.999);
    }

    #[test]
    fn test_projection_fov() {
        let Projection::Perspective(perspective) = CameraRig::default().projection() else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 75f32.to_radians()).abs() < 1e-6);
    }
}
