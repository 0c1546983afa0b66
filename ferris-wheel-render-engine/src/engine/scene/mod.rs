//! Spawning of the ride scene.
//!
//! Everything is built once, after the ride preset has resolved. The wheel,
//! cabins, ground, skybox and tree rings hang under a single
//! [`RideSceneRoot`] so the scene toggle can hide them together. Lights stay
//! outside the root; their markers form their own toggleable group.

/// Axes helper drawn with gizmos.
pub mod gizmos;

/// Grass ground disc and the inside-out sky sphere.
pub mod ground;

/// Point lights and their marker spheres.
pub mod lights;

/// Two rings of procedurally varied trees with swaying foliage.
///
/// Placement is a pure function of ring distance and a seeded RNG.
pub mod trees;

/// Wheel structure and cabins.
pub mod wheel;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::{SceneTextures, load_scene_textures};
use crate::engine::ride::{PhysicsParams, SwayRegistry, WheelAssembly};
use crate::gui::settings::DebugSettings;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::default_pixel_size;
use constants::scene::{DEFAULT_CABIN_COUNT, DEFAULT_TREE_SEED, WHEEL_CENTER, WHEEL_RADIUS};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Scene shape decided by the ride preset.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideLayout {
    pub cabin_count: usize,
    pub tree_seed: u64,
}

impl Default for RideLayout {
    fn default() -> Self {
        Self {
            cabin_count: DEFAULT_CABIN_COUNT,
            tree_seed: DEFAULT_TREE_SEED,
        }
    }
}

/// Parent of every object the scene visibility toggle controls.
#[derive(Component)]
pub struct RideSceneRoot;

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Build the scene once the preset is known.
pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    layout: Option<Res<RideLayout>>,
    physics: Res<PhysicsParams>,
    mut settings: ResMut<DebugSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if !loading_progress.preset_resolved || loading_progress.scene_built {
        return;
    }
    let layout = layout.map(|l| *l).unwrap_or_default();

    if let Ok(window) = windows.single() {
        settings.set_pixel_size(default_pixel_size(window.width()));
    }

    let textures: SceneTextures = load_scene_textures(&asset_server);
    let assembly = WheelAssembly::new(WHEEL_CENTER, WHEEL_RADIUS, layout.cabin_count);
    let mut registry = SwayRegistry::default();

    let root = commands
        .spawn((
            RideSceneRoot,
            Name::new("RideScene"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    wheel::spawn_wheel(&mut commands, root, &assembly, &physics, &mut meshes, &mut materials);
    ground::spawn_ground(&mut commands, root, &textures, &mut meshes, &mut materials);
    ground::spawn_skybox(&mut commands, root, &textures, &mut meshes, &mut materials);

    let mut rng = StdRng::seed_from_u64(layout.tree_seed);
    trees::spawn_tree_rings(
        &mut commands,
        root,
        assembly.radius(),
        &mut rng,
        &mut registry,
        &mut meshes,
        &mut materials,
    );

    lights::spawn_lights(&mut commands, &settings, &mut meshes, &mut materials);

    info!(
        "✓ Scene built: {} cabins, {} swaying trees, pixel size {}",
        assembly.cabins().len(),
        registry.len(),
        settings.pixel_size
    );

    commands.insert_resource(textures);
    commands.insert_resource(assembly);
    commands.insert_resource(registry);
    loading_progress.scene_built = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colour_splits_channels() {
        let colour = hex_colour(0x87ceeb).to_srgba();
        assert!((colour.red - 0x87 as f32 / 255.0).abs() < 1e-6);
        assert!((colour.green - 0xce as f32 / 255.0).abs() < 1e-6);
        assert!((colour.blue - 0xeb as f32 / 255.0).abs() < 1e-6);
    }
}
