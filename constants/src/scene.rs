use bevy::math::Vec3;

pub const WHEEL_CENTER: Vec3 = Vec3::ZERO;
pub const WHEEL_RADIUS: f32 = 8.0;
pub const DEFAULT_CABIN_COUNT: usize = 12;

/// Half-width of the wheel: the two rims sit at +/- this Z offset.
pub const WHEEL_HALF_DEPTH: f32 = 0.6;

/// Full extents of a cabin's pick volume.
pub const CABIN_SIZE: Vec3 = Vec3::new(1.2, 1.4, 1.2);

pub const GROUND_RADIUS: f32 = 20.0;
pub const GROUND_HEIGHT: f32 = 1.0;
pub const GROUND_Y: f32 = -6.2;
pub const GROUND_TEXTURE_REPEAT: f32 = 5.0;

pub const TREE_BASE_Y: f32 = -6.0;
pub const TREES_PER_RING: usize = 10;

/// Ring distances measured outward from the wheel radius.
pub const TREE_RING_OFFSETS: [f32; 2] = [6.0, 12.0];
pub const DEFAULT_TREE_SEED: u64 = 7;

pub const SKYBOX_RADIUS: f32 = 100.0;
pub const SKYBOX_Y: f32 = -5.0;

pub const LIGHT_POSITIONS: [Vec3; 3] = [
    Vec3::new(0.0, 10.0, 10.0),
    Vec3::new(0.0, 15.0, 0.0),
    Vec3::new(0.0, -10.0, 20.0),
];
pub const LIGHT_RANGE: f32 = 100.0;
pub const LIGHT_MARKER_RADIUS: f32 = 0.5;

pub const AXES_LENGTH: f32 = 5.0;

/// Camera pose restored by the reset command.
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 0.0, 20.0);

/// Offset from a cabin's centre to the rider's eye.
pub const CABIN_EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 1.0);

pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
