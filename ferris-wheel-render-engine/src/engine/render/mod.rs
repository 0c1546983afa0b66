//! Post-processing applied to the ride camera.
//!
//! A single full-screen pass quantises the frame into square blocks and
//! darkens block boundaries where colour or brightness changes sharply.

/// Pixelation with edge darkening as a Core3d render graph node.
///
/// Runs between tonemapping and the end of main pass post processing.
pub mod pixelate_post_processing;
