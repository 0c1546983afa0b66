//! Runtime systems that keep the scene in step with the ride model and the
//! operator settings.

/// Ride tick (wheel, cabins) on the fixed clock and leaf sway per frame.
pub mod animation;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Applies debug panel settings to lights, visibility groups and the post-process pass.
pub mod settings_sync;

/// Window resize bookkeeping.
pub mod viewport;
