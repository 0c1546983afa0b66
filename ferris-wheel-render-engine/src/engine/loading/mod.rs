//! Asset loading for the ride scene.
//!
//! The ride preset (JSON) is resolved first because it sizes the wheel and
//! seeds the tree rings. Textures are requested while the scene is built and
//! monitored afterwards; a texture that fails to load is reported and the
//! affected surface keeps its plain colour.

/// Ride preset asset and its application to the runtime resources.
pub mod preset_loader;

/// Loading progress tracking resource for state transitions.
///
/// Monitors preset resolution, scene construction and texture status.
pub mod progress;

/// Scene texture requests and load-state monitoring.
///
/// Reports unavailable textures through logging and the web RPC channel.
pub mod texture_loader;
