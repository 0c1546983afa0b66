use super::RideCamera;
use crate::engine::ride::{CameraMode, RideControl, WheelAssembly};
use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use constants::scene::CABIN_EYE_OFFSET;

const LOOK_SENSITIVITY: f32 = 0.002;
const MAX_LOOK_PITCH: f32 = 1.55;

/// Pointer-lock look angles used while riding a cabin.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CabinLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl CabinLook {
    pub fn from_rotation(rotation: Quat) -> Self {
        let (yaw, pitch, _) = rotation.to_euler(EulerRot::YXZ);
        Self {
            yaw,
            pitch: pitch.clamp(-MAX_LOOK_PITCH, MAX_LOOK_PITCH),
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn apply_motion(&mut self, delta: Vec2) {
        self.yaw -= delta.x * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * LOOK_SENSITIVITY).clamp(-MAX_LOOK_PITCH, MAX_LOOK_PITCH);
    }
}

// Pin the camera to the selected cabin and apply mouse look
pub fn cabin_camera_follow(
    control: Res<RideControl>,
    assembly: Option<Res<WheelAssembly>>,
    mut look: ResMut<CabinLook>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut camera_query: Query<&mut Transform, With<RideCamera>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let Some(id) = control.selected() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Look starts from wherever the camera pointed when the cabin was picked.
    if control.is_changed() {
        *look = CabinLook::from_rotation(camera_transform.rotation);
    } else if mouse_delta != Vec2::ZERO {
        look.apply_motion(mouse_delta);
    }

    let Some(position) = assembly.and_then(|a| a.cabin_position(id)) else {
        return;
    };
    camera_transform.translation = position + CABIN_EYE_OFFSET;
    camera_transform.rotation = look.rotation();
}

/// Grab mode used while riding. Windows and X11 cannot lock the cursor, only
/// confine it; Wayland accepts either, so every non-macOS desktop confines.
pub fn ride_grab_mode() -> CursorGrabMode {
    if cfg!(any(target_os = "macos", target_arch = "wasm32")) {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::Confined
    }
}

/// Grab and hide the cursor while riding, release it in free mode.
pub fn sync_cursor_grab(
    control: Res<RideControl>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !control.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    match control.mode() {
        CameraMode::Locked => {
            window.cursor_options.grab_mode = ride_grab_mode();
            window.cursor_options.visible = false;
        }
        CameraMode::Free => {
            window.cursor_options.grab_mode = CursorGrabMode::None;
            window.cursor_options.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ride::{CabinId, PhysicsParams};
    use bevy::ecs::system::RunSystemOnce;
    use constants::scene::{WHEEL_CENTER, WHEEL_RADIUS};

    #[test]
    fn look_round_trips_rotation() {
        let rotation = Quat::from_euler(EulerRot::YXZ, 0.7, -0.3, 0.0);
        let look = CabinLook::from_rotation(rotation);
        assert!((look.yaw - 0.7).abs() < 1e-5);
        assert!((look.pitch + 0.3).abs() < 1e-5);
        assert!(look.rotation().abs_diff_eq(rotation, 1e-5));
    }

    #[test]
    fn look_pitch_is_clamped() {
        let mut look = CabinLook::default();
        look.apply_motion(Vec2::new(0.0, -10_000.0));
        assert_eq!(look.pitch, MAX_LOOK_PITCH);
    }

    #[test]
    fn camera_rides_selected_cabin() {
        let mut world = World::new();
        let mut assembly = WheelAssembly::new(WHEEL_CENTER, WHEEL_RADIUS, 12);
        for _ in 0..30 {
            assembly.tick(&PhysicsParams::default());
        }
        let expected = assembly.cabin_position(CabinId(3)).unwrap() + CABIN_EYE_OFFSET;
        world.insert_resource(assembly);
        world.init_resource::<CabinLook>();
        world.init_resource::<Events<MouseMotion>>();
        let mut control = RideControl::default();
        control.attempt_pick(Some(CabinId(3)));
        world.insert_resource(control);
        let camera = world
            .spawn((
                RideCamera,
                Transform::from_xyz(0.0, 0.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
            ))
            .id();

        world.run_system_once(cabin_camera_follow).unwrap();

        let transform = world.get::<Transform>(camera).unwrap();
        assert!(transform.translation.abs_diff_eq(expected, 1e-5));
        // Orientation carried over from the orbit view.
        assert!(transform.rotation.abs_diff_eq(Quat::IDENTITY, 1e-5));
    }

    #[test]
    fn camera_untouched_without_selection() {
        let mut world = World::new();
        world.insert_resource(WheelAssembly::new(WHEEL_CENTER, WHEEL_RADIUS, 12));
        world.init_resource::<CabinLook>();
        world.init_resource::<Events<MouseMotion>>();
        world.init_resource::<RideControl>();
        let start = Transform::from_xyz(4.0, 2.0, 18.0).looking_at(Vec3::ZERO, Vec3::Y);
        let camera = world.spawn((RideCamera, start)).id();
        world.send_event(MouseMotion {
            delta: Vec2::new(40.0, -25.0),
        });

        world.run_system_once(cabin_camera_follow).unwrap();

        assert_eq!(*world.get::<Transform>(camera).unwrap(), start);
        assert_eq!(*world.resource::<CabinLook>(), CabinLook::default());
    }

    #[test]
    fn cursor_grabbed_while_riding_and_released_after() {
        let mut world = World::new();
        let mut control = RideControl::default();
        control.attempt_pick(Some(CabinId(0)));
        world.insert_resource(control);
        let window = world.spawn((Window::default(), PrimaryWindow)).id();

        world.run_system_once(sync_cursor_grab).unwrap();
        let options = &world.get::<Window>(window).unwrap().cursor_options;
        assert_eq!(options.grab_mode, ride_grab_mode());
        assert_ne!(options.grab_mode, CursorGrabMode::None);
        assert!(!options.visible);

        world.resource_mut::<RideControl>().reset();
        world.run_system_once(sync_cursor_grab).unwrap();
        let options = &world.get::<Window>(window).unwrap().cursor_options;
        assert_eq!(options.grab_mode, CursorGrabMode::None);
        assert!(options.visible);
    }
}
