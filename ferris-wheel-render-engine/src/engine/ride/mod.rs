//! Ride model: wheel rotation, cabin orbit and swing, leaf sway and the
//! Free/Locked camera-mode state machine.
//!
//! Nothing in here touches rendering. Systems in `engine::systems` and
//! `engine::camera` read these resources each tick and write transforms.

/// Cabin selection and the camera mode derived from it.
pub mod control;

/// Tunable physics parameters.
pub mod physics;

/// Leaf sway curve and the registry of swaying leaf clusters.
pub mod sway;

/// Wheel assembly and cabin kinematics.
pub mod wheel;

pub use control::{CameraMode, PickOutcome, RideControl};
pub use physics::PhysicsParams;
pub use sway::SwayRegistry;
pub use wheel::{Cabin, CabinId, WheelAssembly};
