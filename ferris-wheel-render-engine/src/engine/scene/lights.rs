use super::hex_colour;
use crate::gui::settings::DebugSettings;
use bevy::prelude::*;
use constants::render_settings::{LIGHT_MARKER_COLOUR, LUMENS_PER_INTENSITY_UNIT};
use constants::scene::{LIGHT_MARKER_RADIUS, LIGHT_POSITIONS, LIGHT_RANGE};

/// One of the three scene lights, by panel index.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideLight(pub usize);

/// Parent of the light marker spheres.
#[derive(Component)]
pub struct LightMarkerGroup;

/// Panel intensity to Bevy lumens.
pub fn intensity_to_lumens(intensity: f32) -> f32 {
    intensity.max(0.0) * LUMENS_PER_INTENSITY_UNIT
}

pub fn spawn_lights(
    commands: &mut Commands,
    settings: &DebugSettings,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let markers = commands
        .spawn((
            LightMarkerGroup,
            Name::new("LightMarkers"),
            Transform::default(),
            if settings.show_light_markers {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            },
        ))
        .id();

    let marker_mesh = meshes.add(Sphere::new(LIGHT_MARKER_RADIUS));
    let marker_material = materials.add(StandardMaterial {
        base_color: hex_colour(LIGHT_MARKER_COLOUR),
        unlit: true,
        ..default()
    });

    for (index, position) in LIGHT_POSITIONS.into_iter().enumerate() {
        commands.spawn((
            RideLight(index),
            Name::new(format!("Light{}", index + 1)),
            PointLight {
                intensity: intensity_to_lumens(settings.light_intensities[index]),
                range: LIGHT_RANGE,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_translation(position),
        ));

        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_translation(position),
            ChildOf(markers),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lumens_scale_linearly() {
        assert_eq!(intensity_to_lumens(0.0), 0.0);
        assert_eq!(intensity_to_lumens(20.0), 20.0 * LUMENS_PER_INTENSITY_UNIT);
        assert_eq!(intensity_to_lumens(-5.0), 0.0);
    }
}
