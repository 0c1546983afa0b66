//! Ride camera control.
//!
//! The camera has two strategies, chosen each frame from [`RideControl`]:
//!
//! - **Free**: orbit around a target with left-drag rotate, middle-drag pan
//!   and wheel zoom.
//! - **Locked**: pinned just in front of the selected cabin, with
//!   pointer-lock mouse look. The cursor is grabbed and hidden.
//!
//! Pressing `X` (or the `reset_camera` RPC) releases the cabin and returns the
//! camera to its home pose.
//!
//! [`RideControl`]: crate::engine::ride::RideControl

/// Cabin-pinned camera with pointer-lock look.
pub mod cabin_camera;

/// Orbit camera pose and input controller.
pub mod orbit_camera;

/// Reset command: key binding, event and handler.
pub mod reset;

use bevy::prelude::*;

/// The single 3D camera the ride is viewed through.
#[derive(Component)]
pub struct RideCamera;
