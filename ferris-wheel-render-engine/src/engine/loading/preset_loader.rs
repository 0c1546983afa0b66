use crate::engine::loading::progress::LoadingProgress;
use crate::engine::ride::PhysicsParams;
use crate::engine::scene::RideLayout;
use crate::gui::settings::DebugSettings;
use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::render_settings::DEFAULT_LIGHT_INTENSITIES;
use constants::ride::DEFAULT_TICK_HZ;
use constants::scene::{DEFAULT_CABIN_COUNT, DEFAULT_TREE_SEED};
use serde::{Deserialize, Serialize};

pub const RIDE_PRESET_PATH: &str = "config/ride_preset.json";

/// Largest wheel the scene builder will spawn.
const MAX_CABIN_COUNT: usize = 64;

/// Ride preset as a Bevy asset. Every field is optional in the JSON file.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidePreset {
    pub physics: PhysicsParams,
    pub light_intensities: [f32; 3],
    pub cabin_count: usize,
    pub tree_seed: u64,
    pub tick_hz: f64,
}

impl Default for RidePreset {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            light_intensities: DEFAULT_LIGHT_INTENSITIES,
            cabin_count: DEFAULT_CABIN_COUNT,
            tree_seed: DEFAULT_TREE_SEED,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl RidePreset {
    pub fn layout(&self) -> RideLayout {
        RideLayout {
            cabin_count: self.cabin_count.clamp(1, MAX_CABIN_COUNT),
            tree_seed: self.tree_seed,
        }
    }

    /// Tick rate, falling back to the default for non-positive or non-finite values.
    pub fn tick_hz(&self) -> f64 {
        if self.tick_hz.is_finite() && self.tick_hz > 0.0 {
            self.tick_hz
        } else {
            DEFAULT_TICK_HZ
        }
    }

    /// Push the preset into the runtime resources.
    pub fn apply(&self, physics: &mut PhysicsParams, settings: &mut DebugSettings) {
        *physics = self.physics.sanitised();
        for (index, intensity) in self.light_intensities.iter().enumerate() {
            if settings.set_light_intensity(index, *intensity).is_none() {
                warn!("Ignoring invalid preset intensity for light {}", index + 1);
            }
        }
    }
}

#[derive(Resource, Default)]
pub struct PresetLoader {
    handle: Option<Handle<RidePreset>>,
}

// Start the loading process
pub fn start_loading(mut preset_loader: ResMut<PresetLoader>, asset_server: Res<AssetServer>) {
    preset_loader.handle = Some(asset_server.load(RIDE_PRESET_PATH));
}

/// Resolve the preset once it has loaded or failed. A failed preset falls
/// back to the built-in defaults.
pub fn resolve_ride_preset(
    mut loading_progress: ResMut<LoadingProgress>,
    preset_loader: Res<PresetLoader>,
    presets: Res<Assets<RidePreset>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut physics: ResMut<PhysicsParams>,
    mut settings: ResMut<DebugSettings>,
    mut fixed_time: ResMut<Time<Fixed>>,
) {
    if loading_progress.preset_resolved {
        return;
    }

    let Some(ref handle) = preset_loader.handle else {
        return;
    };

    let preset = if let Some(preset) = presets.get(handle) {
        info!("✓ Ride preset loaded from {}", RIDE_PRESET_PATH);
        preset.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("Ride preset unavailable ({err}), using built-in defaults");
        RidePreset::default()
    } else {
        return;
    };

    preset.apply(&mut physics, &mut settings);
    fixed_time.set_timestep_hz(preset.tick_hz());
    commands.insert_resource(preset.layout());
    loading_progress.preset_resolved = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let preset: RidePreset = serde_json::from_str("{}").unwrap();
        assert_eq!(preset, RidePreset::default());
    }

    #[test]
    fn shipped_preset_parses() {
        let raw = include_str!("../../../assets/config/ride_preset.json");
        let preset: RidePreset = serde_json::from_str(raw).unwrap();
        assert_eq!(preset.cabin_count, DEFAULT_CABIN_COUNT);
        assert_eq!(preset.physics, PhysicsParams::default());
    }

    #[test]
    fn layout_clamps_cabin_count() {
        let preset = RidePreset {
            cabin_count: 0,
            ..default()
        };
        assert_eq!(preset.layout().cabin_count, 1);
        let preset = RidePreset {
            cabin_count: 1000,
            ..default()
        };
        assert_eq!(preset.layout().cabin_count, MAX_CABIN_COUNT);
    }

    #[test]
    fn bad_tick_rate_falls_back() {
        let preset = RidePreset {
            tick_hz: -3.0,
            ..default()
        };
        assert_eq!(preset.tick_hz(), DEFAULT_TICK_HZ);
    }

    #[test]
    fn apply_clamps_into_runtime_resources() {
        let preset = RidePreset {
            physics: PhysicsParams {
                rotation_speed: 9.0,
                ..default()
            },
            light_intensities: [500.0, 10.0, -2.0],
            ..default()
        };
        let mut physics = PhysicsParams::default();
        let mut settings = DebugSettings::default();
        preset.apply(&mut physics, &mut settings);
        assert_eq!(physics.rotation_speed, 0.2);
        assert_eq!(settings.light_intensities, [200.0, 10.0, 0.0]);
    }
}
