//! JSON-RPC 2.0 communication layer for the page embedding the ride.
//!
//! Implements bidirectional messaging between the Bevy engine and the embedding page via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Calling From the Host Page
//!
//! Messages are posted as JSON strings to the iframe's window:
//!
//! ```typescript
//! frame.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "set_physics",
//!   params: { rotation_speed: 0.01 },
//!   id: 1
//! }), "*");
//! ```
//!
//! A request without an `id` is executed but not answered.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Settings
//! - `get_settings`: Current physics parameters and panel settings
//! - `set_physics`: Partial update of `swing_amplitude`, `swing_speed`,
//!   `rotation_speed`, `wheel_animation_speed` (clamped to panel ranges)
//! - `set_light_intensity`: `{ index: 0..=2, intensity }`
//! - `set_visibility`: `{ target: "scene" | "axes" | "light_markers", visible }`
//! - `set_post_processing`: `{ pixel_size?, normal_edge_strength? }`
//!
//! ### Ride
//! - `reset_camera`: Leave the cabin and return the camera home
//! - `get_ride_state`: Camera mode, selected cabin, wheel angle
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! `fps_update`, `cabin_selected`, `camera_reset`, `viewport_resized`,
//! `asset_unavailable`, `debug_message`.

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
