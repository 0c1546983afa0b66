use crate::engine::ride::{CabinId, PhysicsParams, WheelAssembly};
use crate::tools::picking::{CabinBounds, CabinMaterials};
use bevy::prelude::*;
use constants::render_settings::HIGHLIGHT_EMISSIVE_STRENGTH;
use constants::scene::{CABIN_SIZE, GROUND_Y, WHEEL_HALF_DEPTH};
use std::f32::consts::FRAC_PI_2;

const RIM_THICKNESS: f32 = 0.15;
const SPOKE_RADIUS: f32 = 0.06;
const HUB_RADIUS: f32 = 0.6;
const BEAM_RADIUS: f32 = 0.25;
/// Horizontal spread of the A-frame legs at ground level.
const LEG_SPREAD: f32 = 5.0;

/// Rotating part of the wheel: rims, spokes and hub. Spins about Z.
#[derive(Component)]
pub struct WheelBody;

/// Transform and length of a unit-height Y-axis cylinder stretched between two points.
pub fn segment_between(a: Vec3, b: Vec3) -> (Transform, f32) {
    let delta = b - a;
    let length = delta.length();
    let rotation = if length > f32::EPSILON {
        Quat::from_rotation_arc(Vec3::Y, delta / length)
    } else {
        Quat::IDENTITY
    };
    (
        Transform::from_translation((a + b) * 0.5).with_rotation(rotation),
        length,
    )
}

/// Evenly spread hue per cabin.
pub fn cabin_colour(index: usize, count: usize) -> Color {
    let hue = 360.0 * index as f32 / count.max(1) as f32;
    Color::hsl(hue, 0.7, 0.55)
}

pub fn spawn_wheel(
    commands: &mut Commands,
    root: Entity,
    assembly: &WheelAssembly,
    physics: &PhysicsParams,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.85, 0.9),
        metallic: 0.6,
        perceptual_roughness: 0.4,
        ..default()
    });
    let beam_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.45, 0.5),
        perceptual_roughness: 0.7,
        ..default()
    });

    let radius = assembly.radius();
    let center = assembly.center();

    let body = commands
        .spawn((
            WheelBody,
            Name::new("WheelBody"),
            Transform::from_translation(center)
                .with_rotation(Quat::from_rotation_z(assembly.angle())),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    // Torus lies in XZ; tip it into the wheel plane.
    let rim_mesh = meshes.add(Torus {
        minor_radius: RIM_THICKNESS,
        major_radius: radius,
    });
    for z in [-WHEEL_HALF_DEPTH, WHEEL_HALF_DEPTH] {
        commands.spawn((
            Mesh3d(rim_mesh.clone()),
            MeshMaterial3d(frame_material.clone()),
            Transform::from_xyz(0.0, 0.0, z).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ChildOf(body),
        ));
    }

    let spoke_mesh = meshes.add(Cylinder::new(SPOKE_RADIUS, 1.0));
    for cabin in assembly.cabins() {
        let rim_point = Vec3::new(cabin.base_angle().cos(), cabin.base_angle().sin(), 0.0) * radius;
        for z in [-WHEEL_HALF_DEPTH, WHEEL_HALF_DEPTH] {
            let offset = Vec3::Z * z;
            let (transform, length) = segment_between(offset, rim_point + offset);
            commands.spawn((
                Mesh3d(spoke_mesh.clone()),
                MeshMaterial3d(frame_material.clone()),
                transform.with_scale(Vec3::new(1.0, length, 1.0)),
                ChildOf(body),
            ));
        }
    }

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(HUB_RADIUS, WHEEL_HALF_DEPTH * 2.0 + 0.4))),
        MeshMaterial3d(frame_material.clone()),
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ChildOf(body),
    ));

    // Static A-frame on both sides of the wheel.
    let beam_mesh = meshes.add(Cylinder::new(BEAM_RADIUS, 1.0));
    let foot_y = GROUND_Y + 0.5;
    for z in [-(WHEEL_HALF_DEPTH + 0.4), WHEEL_HALF_DEPTH + 0.4] {
        for x in [-LEG_SPREAD, LEG_SPREAD] {
            let (transform, length) =
                segment_between(center + Vec3::Z * z, Vec3::new(x, foot_y, center.z + z));
            commands.spawn((
                Mesh3d(beam_mesh.clone()),
                MeshMaterial3d(beam_material.clone()),
                transform.with_scale(Vec3::new(1.0, length, 1.0)),
                ChildOf(root),
            ));
        }
    }

    spawn_cabins(commands, root, assembly, physics, meshes, materials);
}

fn spawn_cabins(
    commands: &mut Commands,
    root: Entity,
    assembly: &WheelAssembly,
    physics: &PhysicsParams,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let cabin_mesh = meshes.add(Cuboid::from_size(CABIN_SIZE));
    let roof_mesh = meshes.add(Cone {
        radius: CABIN_SIZE.x * 0.6,
        height: 0.4,
    });
    let roof_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.9),
        ..default()
    });
    let count = assembly.cabins().len();

    for index in 0..count {
        let id = CabinId(index);
        let Some(transform) = assembly.cabin_transform(id, physics) else {
            continue;
        };

        let colour = cabin_colour(index, count);
        let base = materials.add(StandardMaterial {
            base_color: colour,
            perceptual_roughness: 0.6,
            ..default()
        });
        let highlight = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            emissive: LinearRgba::WHITE * HIGHLIGHT_EMISSIVE_STRENGTH,
            ..default()
        });

        commands
            .spawn((
                id,
                Name::new(format!("Cabin{index}")),
                Mesh3d(cabin_mesh.clone()),
                MeshMaterial3d(base.clone()),
                CabinBounds(CABIN_SIZE),
                CabinMaterials { base, highlight },
                transform,
                ChildOf(root),
            ))
            .with_children(|cabin| {
                cabin.spawn((
                    Mesh3d(roof_mesh.clone()),
                    MeshMaterial3d(roof_material.clone()),
                    Transform::from_xyz(0.0, CABIN_SIZE.y * 0.5 + 0.2, 0.0),
                ));
            });
    }
}
