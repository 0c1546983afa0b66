use crate::engine::ride::SwayRegistry;
use crate::engine::ride::sway::LeafCluster;
use bevy::prelude::*;
use constants::scene::{TREE_BASE_Y, TREE_RING_OFFSETS, TREES_PER_RING};
use rand::Rng;
use std::f32::consts::TAU;

const TRUNK_HEIGHT: f32 = 2.0;
const TRUNK_RADIUS: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Broadleaf,
    Pine,
    Oak,
}

impl TreeKind {
    /// Kind and vertical scale for a uniform draw in `[0, 1)`.
    pub fn from_draw(r: f32) -> (Self, f32) {
        if r < 0.33 {
            (Self::Broadleaf, r + 0.6)
        } else if r < 0.66 {
            (Self::Pine, r + 0.5)
        } else {
            (Self::Oak, r)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreePlacement {
    pub position: Vec3,
    pub kind: TreeKind,
    pub scale_y: f32,
}

/// `count` trees evenly spaced on a circle of radius `distance` around the origin.
pub fn tree_ring<R: Rng>(count: usize, distance: f32, rng: &mut R) -> Vec<TreePlacement> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let (kind, scale_y) = TreeKind::from_draw(rng.random::<f32>());
            TreePlacement {
                position: Vec3::new(angle.cos() * distance, TREE_BASE_Y, angle.sin() * distance),
                kind,
                scale_y,
            }
        })
        .collect()
}

struct TreeAssets {
    trunk_mesh: Handle<Mesh>,
    trunk_material: Handle<StandardMaterial>,
    round_crown: Handle<Mesh>,
    pine_crown: Handle<Mesh>,
    small_crown: Handle<Mesh>,
    leaf_material: Handle<StandardMaterial>,
    needle_material: Handle<StandardMaterial>,
}

/// Spawn both rings around a wheel of `wheel_radius` and register every crown for swaying.
pub fn spawn_tree_rings<R: Rng>(
    commands: &mut Commands,
    root: Entity,
    wheel_radius: f32,
    rng: &mut R,
    registry: &mut SwayRegistry,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let assets = TreeAssets {
        trunk_mesh: meshes.add(Cylinder::new(TRUNK_RADIUS, TRUNK_HEIGHT)),
        trunk_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.40, 0.26, 0.13),
            perceptual_roughness: 0.95,
            ..default()
        }),
        round_crown: meshes.add(Sphere::new(1.4)),
        pine_crown: meshes.add(Cone {
            radius: 1.2,
            height: 3.0,
        }),
        small_crown: meshes.add(Sphere::new(1.0)),
        leaf_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.18, 0.55, 0.20),
            perceptual_roughness: 0.8,
            ..default()
        }),
        needle_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.08, 0.35, 0.16),
            perceptual_roughness: 0.8,
            ..default()
        }),
    };

    for offset in TREE_RING_OFFSETS {
        for placement in tree_ring(TREES_PER_RING, wheel_radius + offset, rng) {
            spawn_tree(commands, root, &placement, &assets, registry);
        }
    }
}

fn spawn_tree(
    commands: &mut Commands,
    root: Entity,
    placement: &TreePlacement,
    assets: &TreeAssets,
    registry: &mut SwayRegistry,
) {
    let tree = commands
        .spawn((
            Name::new(format!("{:?}Tree", placement.kind)),
            Transform::from_translation(placement.position)
                .with_scale(Vec3::new(1.0, placement.scale_y, 1.0)),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    commands.spawn((
        Mesh3d(assets.trunk_mesh.clone()),
        MeshMaterial3d(assets.trunk_material.clone()),
        Transform::from_xyz(0.0, TRUNK_HEIGHT * 0.5, 0.0),
        ChildOf(tree),
    ));

    let crown = commands
        .spawn((
            LeafCluster,
            Transform::from_xyz(0.0, TRUNK_HEIGHT, 0.0),
            Visibility::default(),
            ChildOf(tree),
        ))
        .id();
    registry.register(crown);

    match placement.kind {
        TreeKind::Broadleaf => {
            commands.spawn((
                Mesh3d(assets.round_crown.clone()),
                MeshMaterial3d(assets.leaf_material.clone()),
                Transform::from_xyz(0.0, 1.0, 0.0),
                ChildOf(crown),
            ));
        }
        TreeKind::Pine => {
            for (y, scale) in [(1.0, 1.0), (2.2, 0.7)] {
                commands.spawn((
                    Mesh3d(assets.pine_crown.clone()),
                    MeshMaterial3d(assets.needle_material.clone()),
                    Transform::from_xyz(0.0, y, 0.0).with_scale(Vec3::splat(scale)),
                    ChildOf(crown),
                ));
            }
        }
        TreeKind::Oak => {
            for offset in [
                Vec3::new(0.0, 1.6, 0.0),
                Vec3::new(0.9, 1.0, 0.3),
                Vec3::new(-0.8, 1.1, -0.4),
                Vec3::new(0.1, 1.0, -0.9),
            ] {
                commands.spawn((
                    Mesh3d(assets.small_crown.clone()),
                    MeshMaterial3d(assets.leaf_material.clone()),
                    Transform::from_translation(offset),
                    ChildOf(crown),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn kind_thresholds() {
        assert_eq!(TreeKind::from_draw(0.1).0, TreeKind::Broadleaf);
        assert_eq!(TreeKind::from_draw(0.5).0, TreeKind::Pine);
        assert_eq!(TreeKind::from_draw(0.9).0, TreeKind::Oak);
        assert!((TreeKind::from_draw(0.1).1 - 0.7).abs() < 1e-6);
        assert!((TreeKind::from_draw(0.5).1 - 1.0).abs() < 1e-6);
        assert!((TreeKind::from_draw(0.9).1 - 0.9).abs() < 1e-6);
    }

    #[test]
    fn rings_sit_on_their_circles() {
        let mut rng = StdRng::seed_from_u64(7);
        for offset in TREE_RING_OFFSETS {
            let distance = 8.0 + offset;
            let ring = tree_ring(TREES_PER_RING, distance, &mut rng);
            assert_eq!(ring.len(), TREES_PER_RING);
            for tree in &ring {
                let planar = Vec2::new(tree.position.x, tree.position.z).length();
                assert!((planar - distance).abs() < 1e-4);
                assert_eq!(tree.position.y, TREE_BASE_Y);
            }
        }
    }

    #[test]
    fn ring_is_evenly_spaced() {
        let mut rng = StdRng::seed_from_u64(1);
        let ring = tree_ring(10, 14.0, &mut rng);
        let first = ring[0].position;
        assert!(first.abs_diff_eq(Vec3::new(14.0, TREE_BASE_Y, 0.0), 1e-4));
        let opposite = ring[5].position;
        assert!(opposite.abs_diff_eq(Vec3::new(-14.0, TREE_BASE_Y, 0.0), 1e-3));
    }

    #[test]
    fn same_seed_same_forest() {
        let a = tree_ring(10, 14.0, &mut StdRng::seed_from_u64(42));
        let b = tree_ring(10, 14.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
