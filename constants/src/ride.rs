/// Default swing amplitude of a cabin, in radians.
pub const DEFAULT_SWING_AMPLITUDE: f32 = 0.04;

/// Default swing phase increment per simulation tick.
pub const DEFAULT_SWING_SPEED: f32 = 0.03;

/// Default wheel rotation increment per simulation tick, in radians.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.005;

/// Default wheel animation speed (exposed to the panel, not consumed by the ride model).
pub const DEFAULT_WHEEL_ANIMATION_SPEED: f32 = 1.5;

pub const SWING_AMPLITUDE_RANGE: (f32, f32) = (0.0, 1.0);
pub const SWING_SPEED_RANGE: (f32, f32) = (0.0, 0.2);
pub const ROTATION_SPEED_RANGE: (f32, f32) = (-0.2, 0.2);
pub const WHEEL_ANIMATION_SPEED_RANGE: (f32, f32) = (-10.0, 10.0);

/// Simulation ticks per second. Per-tick increments above are tied to this rate.
pub const DEFAULT_TICK_HZ: f64 = 60.0;

/// Leaf sway amplitude in radians.
pub const LEAF_SWAY_AMPLITUDE: f32 = 0.1;

/// Leaf sway angular frequency in radians per second.
pub const LEAF_SWAY_FREQUENCY: f32 = 0.5;
