use crate::engine::ride::sway::{LeafCluster, leaf_sway};
use crate::engine::ride::{CabinId, PhysicsParams, SwayRegistry, WheelAssembly};
use crate::engine::scene::wheel::WheelBody;
use bevy::prelude::*;

/// One ride tick: rotate the wheel and write every cabin's position and tilt.
/// Runs on the fixed clock so increments are per tick, not per rendered frame.
pub fn advance_ride(
    physics: Res<PhysicsParams>,
    assembly: Option<ResMut<WheelAssembly>>,
    mut wheel_bodies: Query<&mut Transform, (With<WheelBody>, Without<CabinId>)>,
    mut cabins: Query<(&CabinId, &mut Transform), Without<WheelBody>>,
) {
    let Some(mut assembly) = assembly else {
        return;
    };

    assembly.tick(&physics);

    for mut transform in &mut wheel_bodies {
        transform.rotation = Quat::from_rotation_z(assembly.angle());
    }

    for (id, mut transform) in &mut cabins {
        if let Some(next) = assembly.cabin_transform(*id, &physics) {
            transform.translation = next.translation;
            transform.rotation = next.rotation;
        }
    }
}

/// Rotate every registered leaf cluster by the sway curve at the current time.
pub fn sway_leaves(
    time: Res<Time>,
    registry: Option<Res<SwayRegistry>>,
    mut leaves: Query<&mut Transform, With<LeafCluster>>,
) {
    let Some(registry) = registry else {
        return;
    };

    let rotation = Quat::from_rotation_y(leaf_sway(time.elapsed_secs()));
    for entity in registry.entities() {
        if let Ok(mut transform) = leaves.get_mut(*entity) {
            transform.rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use constants::scene::{WHEEL_CENTER, WHEEL_RADIUS};
    use std::time::Duration;

    #[test]
    fn ticks_move_wheel_and_cabins() {
        let mut world = World::new();
        let physics = PhysicsParams::default();
        world.insert_resource(physics);
        world.insert_resource(WheelAssembly::new(WHEEL_CENTER, WHEEL_RADIUS, 4));
        let body = world.spawn((WheelBody, Transform::default())).id();
        let cabins: Vec<Entity> = (0..4)
            .map(|i| world.spawn((CabinId(i), Transform::default())).id())
            .collect();

        for _ in 0..10 {
            world.run_system_once(advance_ride).unwrap();
        }

        let assembly = world.resource::<WheelAssembly>();
        assert!((assembly.angle() - 10.0 * physics.rotation_speed).abs() < 1e-6);

        let body_rotation = world.get::<Transform>(body).unwrap().rotation;
        assert!(body_rotation.abs_diff_eq(Quat::from_rotation_z(assembly.angle()), 1e-6));

        for (i, entity) in cabins.iter().enumerate() {
            let transform = world.get::<Transform>(*entity).unwrap();
            let expected = assembly.cabin_transform(CabinId(i), &physics).unwrap();
            assert!(transform.translation.abs_diff_eq(expected.translation, 1e-6));
            assert!(
                (transform.translation.distance(WHEEL_CENTER) - WHEEL_RADIUS).abs() < 1e-4
            );
        }
    }

    #[test]
    fn tick_without_wheel_is_noop() {
        let mut world = World::new();
        world.insert_resource(PhysicsParams::default());
        let cabin = world.spawn((CabinId(0), Transform::default())).id();
        world.run_system_once(advance_ride).unwrap();
        assert_eq!(*world.get::<Transform>(cabin).unwrap(), Transform::default());
    }

    #[test]
    fn only_registered_leaves_sway() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(std::f32::consts::PI));
        world.insert_resource(time);

        let registered = world.spawn((LeafCluster, Transform::default())).id();
        let stray = world.spawn((LeafCluster, Transform::default())).id();
        let mut registry = SwayRegistry::default();
        registry.register(registered);
        world.insert_resource(registry);

        world.run_system_once(sway_leaves).unwrap();

        let swayed = world.get::<Transform>(registered).unwrap().rotation;
        assert!(swayed.abs_diff_eq(Quat::from_rotation_y(0.1), 1e-5));
        assert_eq!(world.get::<Transform>(stray).unwrap().rotation, Quat::IDENTITY);
    }
}
