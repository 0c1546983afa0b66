use super::RideCamera;
use crate::engine::ride::{CameraMode, RideControl};
use crate::gui::state::UiPointerCapture;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::scene::{CAMERA_HOME, WHEEL_CENTER};

const ROTATE_SENSITIVITY: f32 = 0.005;
/// Pan distance per pixel, relative to the orbit distance.
const PAN_SENSITIVITY: f32 = 0.0015;
const ZOOM_STEP: f32 = 0.1;
const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 80.0;
const MAX_PITCH: f32 = 1.5;

/// Orbit pose around a target point, used while no cabin is selected.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::home()
    }
}

impl OrbitCamera {
    /// Pose that puts the camera at `eye` looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(MIN_DISTANCE);
        let dir = offset / distance;
        Self {
            target,
            yaw: dir.x.atan2(dir.z),
            pitch: -dir.y.clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    pub fn home() -> Self {
        Self::looking_from(CAMERA_HOME, WHEEL_CENTER)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn transform(&self) -> Transform {
        let rotation = self.rotation();
        Transform::from_translation(self.target + rotation * Vec3::Z * self.distance)
            .with_rotation(rotation)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ROTATE_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Slide the target in the view plane, following the cursor.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.rotation();
        let scale = self.distance * PAN_SENSITIVITY;
        self.target += (rotation * Vec3::NEG_X * delta.x + rotation * Vec3::Y * delta.y) * scale;
    }

    /// Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (1.0 - scroll * ZOOM_STEP)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

pub fn orbit_camera_controller(
    control: Res<RideControl>,
    capture: Res<UiPointerCapture>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<RideCamera>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.01,
        };
    }

    if control.mode() != CameraMode::Free || capture.pointer_over_ui {
        return;
    }

    let before = *orbit;
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.rotate(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Middle) {
            orbit.pan(mouse_delta);
        }
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    if *orbit == before && !control.is_changed() {
        return;
    }
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ride::CabinId;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn home_matches_reset_pose() {
        let transform = OrbitCamera::home().transform();
        assert!(transform.translation.abs_diff_eq(CAMERA_HOME, 1e-5));
        let forward = transform.forward().as_vec3();
        assert!(forward.abs_diff_eq((WHEEL_CENTER - CAMERA_HOME).normalize(), 1e-5));
    }

    #[test]
    fn looking_from_round_trips_eye() {
        let eye = Vec3::new(6.0, 9.0, -12.0);
        let target = Vec3::new(1.0, 0.0, 0.0);
        let orbit = OrbitCamera::looking_from(eye, target);
        let transform = orbit.transform();
        assert!(transform.translation.abs_diff_eq(eye, 1e-4));
        let forward = transform.forward().as_vec3();
        assert!(forward.abs_diff_eq((target - eye).normalize(), 1e-4));
    }

    #[test]
    fn rotate_keeps_distance_and_clamps_pitch() {
        let mut orbit = OrbitCamera::home();
        orbit.rotate(Vec2::new(120.0, -4000.0));
        assert_eq!(orbit.pitch, MAX_PITCH);
        let offset = orbit.transform().translation - orbit.target;
        assert!((offset.length() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_bounded() {
        let mut orbit = OrbitCamera::home();
        orbit.zoom(100.0);
        assert_eq!(orbit.distance, MIN_DISTANCE);
        orbit.zoom(-100.0);
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn pan_moves_target_in_view_plane() {
        let mut orbit = OrbitCamera::home();
        orbit.pan(Vec2::new(10.0, 0.0));
        // Home looks down -Z, so a horizontal drag only moves along X.
        assert!(orbit.target.x < 0.0);
        assert!(orbit.target.y.abs() < 1e-6);
        assert!(orbit.target.z.abs() < 1e-6);
    }

    fn drag_world(control: RideControl) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(control);
        world.init_resource::<UiPointerCapture>();
        world.init_resource::<OrbitCamera>();
        world.init_resource::<Events<MouseMotion>>();
        world.init_resource::<Events<MouseWheel>>();
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        world.insert_resource(buttons);
        let camera = world
            .spawn((RideCamera, OrbitCamera::home().transform()))
            .id();
        world.send_event(MouseMotion {
            delta: Vec2::new(60.0, 15.0),
        });
        (world, camera)
    }

    #[test]
    fn left_drag_orbits_in_free_mode() {
        let (mut world, camera) = drag_world(RideControl::default());

        world.run_system_once(orbit_camera_controller).unwrap();

        let orbit = *world.resource::<OrbitCamera>();
        assert_ne!(orbit, OrbitCamera::home());
        assert_eq!(*world.get::<Transform>(camera).unwrap(), orbit.transform());
    }

    #[test]
    fn drag_is_ignored_while_riding() {
        let mut control = RideControl::default();
        control.attempt_pick(Some(CabinId(2)));
        let (mut world, camera) = drag_world(control);
        let start = *world.get::<Transform>(camera).unwrap();

        world.run_system_once(orbit_camera_controller).unwrap();

        assert_eq!(*world.resource::<OrbitCamera>(), OrbitCamera::home());
        assert_eq!(*world.get::<Transform>(camera).unwrap(), start);
    }
}
