use crate::engine::camera::RideCamera;
use crate::engine::render::pixelate_post_processing::PixelateSettings;
use crate::engine::scene::RideSceneRoot;
use crate::engine::scene::lights::{LightMarkerGroup, RideLight, intensity_to_lumens};
use crate::gui::settings::DebugSettings;
use bevy::prelude::*;

fn visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Push panel settings into the scene whenever they change.
pub fn apply_debug_settings(
    settings: Res<DebugSettings>,
    mut scene_roots: Query<&mut Visibility, (With<RideSceneRoot>, Without<LightMarkerGroup>)>,
    mut marker_groups: Query<&mut Visibility, (With<LightMarkerGroup>, Without<RideSceneRoot>)>,
    mut lights: Query<(&RideLight, &mut PointLight)>,
    mut cameras: Query<&mut PixelateSettings, With<RideCamera>>,
) {
    if !settings.is_changed() {
        return;
    }

    for mut vis in &mut scene_roots {
        *vis = visibility(settings.show_scene);
    }
    for mut vis in &mut marker_groups {
        *vis = visibility(settings.show_light_markers);
    }
    for (RideLight(index), mut light) in &mut lights {
        if let Some(intensity) = settings.light_intensities.get(*index) {
            light.intensity = intensity_to_lumens(*intensity);
        }
    }
    for mut pixelate in &mut cameras {
        pixelate.pixel_size = settings.pixel_size as f32;
        pixelate.normal_edge_strength = settings.normal_edge_strength;
    }
}
