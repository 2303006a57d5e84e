//! Turntable rotation for the car

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Spins its entity around the Y axis for as long as it exists
#[derive(Component, Debug, Clone)]
pub struct Turntable {
    /// Accumulated `delta * speed`, never wrapped
    pub elapsed: f32,
    /// Radians per second
    pub speed: f32,
}

impl Default for Turntable {
    fn default() -> Self {
        Self::new(showroom_config::TURNTABLE_SPEED)
    }
}

impl Turntable {
    pub fn new(speed: f32) -> Self {
        Self { elapsed: 0.0, speed }
    }

    /// Advance by one frame and return the new yaw
    pub fn advance(&mut self, delta_secs: f32) -> f32 {
        self.elapsed += delta_secs * self.speed;
        self.yaw()
    }

    /// Current yaw in `[0, 2π)`
    pub fn yaw(&self) -> f32 {
        self.elapsed.rem_euclid(TAU)
    }
}

pub struct TurntablePlugin;

impl Plugin for TurntablePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, spin_turntables);
    }
}

fn spin_turntables(time: Res<Time>, mut query: Query<(&mut Turntable, &mut Transform)>) {
    let delta = time.delta_secs();
    for (mut turntable, mut transform) in query.iter_mut() {
        let yaw = turntable.advance(delta);
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_elapsed_accumulates_speed() {
        let mut turntable = Turntable::default();
        let deltas = [0.016, 0.017, 0.0, 0.5, 0.033];
        let mut previous = turntable.elapsed;
        for delta in deltas {
            turntable.advance(delta);
            assert!(turntable.elapsed >= previous);
            previous = turntable.elapsed;
        }
        let expected: f32 = deltas.iter().map(|d| d * 0.3).sum();
        assert!((turntable.elapsed - expected).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_wraps_full_turn() {
        let mut turntable = Turntable::new(1.0);
        let yaw = turntable.advance(TAU + 0.25);
        assert!((yaw - 0.25).abs() < EPSILON);
        assert!(turntable.elapsed > TAU);
    }

    #[test]
    fn test_system_rotates_transform() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(std::time::Duration::from_secs(2));
        world.insert_resource(time);
        let entity = world.spawn((Turntable::default(), Transform::default())).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(spin_turntables);
        schedule.run(&mut world);

        let transform = world.get::<Transform>(entity).unwrap();
        let expected = Quat::from_rotation_y(0.6);
        assert!(transform.rotation.abs_diff_eq(expected, EPSILON));
        assert!((world.get::<Turntable>(entity).unwrap().elapsed - 0.6).abs() < EPSILON);
    }
}
