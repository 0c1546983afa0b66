//! Shared tunables for the Ferris wheel scene.
//!
//! Physics defaults and operator-panel ranges, scene layout, and render
//! defaults. Kept in a separate crate so the engine and any tooling read the
//! same numbers.

/// Ride physics defaults and the ranges exposed to operator surfaces.
pub mod ride;

/// Scene layout: wheel, ground, trees, skybox, lights and camera poses.
pub mod scene;

/// Lighting, post-processing and highlight defaults.
pub mod render_settings;
