use super::hex_colour;
use crate::engine::loading::texture_loader::SceneTextures;
use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use constants::render_settings::{GRASS_COLOUR, SKY_COLOUR};
use constants::scene::*;

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct Skybox;

/// Grass disc under the wheel. The texture tiles across the top face.
pub fn spawn_ground(
    commands: &mut Commands,
    root: Entity,
    textures: &SceneTextures,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: hex_colour(GRASS_COLOUR),
        base_color_texture: Some(textures.grass.clone()),
        uv_transform: Affine2::from_scale(Vec2::splat(GROUND_TEXTURE_REPEAT)),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Ground,
        Name::new("Ground"),
        Mesh3d(meshes.add(Cylinder::new(GROUND_RADIUS, GROUND_HEIGHT))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
        ChildOf(root),
    ));
}

/// Sky sphere seen from inside, so only back faces are drawn.
pub fn spawn_skybox(
    commands: &mut Commands,
    root: Entity,
    textures: &SceneTextures,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: hex_colour(SKY_COLOUR),
        base_color_texture: Some(textures.skybox.clone()),
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });

    commands.spawn((
        Skybox,
        Name::new("Skybox"),
        Mesh3d(meshes.add(Sphere::new(SKYBOX_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, SKYBOX_Y, 0.0),
        ChildOf(root),
    ));
}
