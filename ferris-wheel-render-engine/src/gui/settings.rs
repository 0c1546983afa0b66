use crate::engine::ride::PhysicsParams;
use crate::engine::ride::physics::PhysicsField;
use bevy::prelude::*;
use constants::render_settings::*;
use serde::{Deserialize, Serialize};

/// Operator-facing scene settings shared by the native panel and the RPC bridge.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct DebugSettings {
    pub light_intensities: [f32; 3],
    pub show_scene: bool,
    pub show_axes: bool,
    pub show_light_markers: bool,
    pub pixel_size: u32,
    pub normal_edge_strength: f32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            light_intensities: DEFAULT_LIGHT_INTENSITIES,
            show_scene: true,
            show_axes: false,
            show_light_markers: false,
            pixel_size: 4,
            normal_edge_strength: DEFAULT_NORMAL_EDGE_STRENGTH,
        }
    }
}

impl DebugSettings {
    /// Clamp and store a light intensity. `None` for an unknown light or a non-finite value.
    pub fn set_light_intensity(&mut self, index: usize, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let slot = self.light_intensities.get_mut(index)?;
        *slot = value.clamp(LIGHT_INTENSITY_RANGE.0, LIGHT_INTENSITY_RANGE.1);
        Some(*slot)
    }

    pub fn set_pixel_size(&mut self, value: u32) -> u32 {
        self.pixel_size = value.clamp(PIXEL_SIZE_RANGE.0, PIXEL_SIZE_RANGE.1);
        self.pixel_size
    }

    /// Clamp to range and snap to the slider step.
    pub fn set_normal_edge_strength(&mut self, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let (min, max) = NORMAL_EDGE_STRENGTH_RANGE;
        let snapped = (value / NORMAL_EDGE_STRENGTH_STEP).round() * NORMAL_EDGE_STRENGTH_STEP;
        self.normal_edge_strength = snapped.clamp(min, max);
        Some(self.normal_edge_strength)
    }

    pub fn visibility(&self, target: VisibilityTarget) -> bool {
        match target {
            VisibilityTarget::Scene => self.show_scene,
            VisibilityTarget::Axes => self.show_axes,
            VisibilityTarget::LightMarkers => self.show_light_markers,
        }
    }

    pub fn set_visibility(&mut self, target: VisibilityTarget, visible: bool) {
        match target {
            VisibilityTarget::Scene => self.show_scene = visible,
            VisibilityTarget::Axes => self.show_axes = visible,
            VisibilityTarget::LightMarkers => self.show_light_markers = visible,
        }
    }
}

/// Groups whose visibility can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityTarget {
    Scene,
    Axes,
    LightMarkers,
}

impl VisibilityTarget {
    pub const ALL: [VisibilityTarget; 3] = [Self::Scene, Self::Axes, Self::LightMarkers];

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scene" => Some(Self::Scene),
            "axes" => Some(Self::Axes),
            "light_markers" | "lightmarkers" | "markers" => Some(Self::LightMarkers),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scene => "Show Scene",
            Self::Axes => "Show Axes",
            Self::LightMarkers => "Show Light Markers",
        }
    }
}

/// A numeric row of the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSetting {
    Physics(PhysicsField),
    LightIntensity(usize),
    PixelSize,
    NormalEdgeStrength,
}

impl PanelSetting {
    pub fn label(self) -> String {
        match self {
            Self::Physics(field) => field.label().to_string(),
            Self::LightIntensity(index) => format!("Light {} Intensity", index + 1),
            Self::PixelSize => "Pixel Size".to_string(),
            Self::NormalEdgeStrength => "Normal Edge Strength".to_string(),
        }
    }

    pub fn step(self) -> f32 {
        match self {
            Self::Physics(PhysicsField::SwingAmplitude) => 0.01,
            Self::Physics(PhysicsField::SwingSpeed) => 0.005,
            Self::Physics(PhysicsField::RotationSpeed) => 0.001,
            Self::Physics(PhysicsField::WheelAnimationSpeed) => 0.1,
            Self::LightIntensity(_) => 5.0,
            Self::PixelSize => 1.0,
            Self::NormalEdgeStrength => NORMAL_EDGE_STRENGTH_STEP,
        }
    }

    pub fn read(self, physics: &PhysicsParams, settings: &DebugSettings) -> f32 {
        match self {
            Self::Physics(field) => physics.get(field),
            Self::LightIntensity(index) => settings
                .light_intensities
                .get(index)
                .copied()
                .unwrap_or_default(),
            Self::PixelSize => settings.pixel_size as f32,
            Self::NormalEdgeStrength => settings.normal_edge_strength,
        }
    }

    /// Move the value by `steps` increments, clamped to the setting's range.
    pub fn nudge(self, steps: f32, physics: &mut PhysicsParams, settings: &mut DebugSettings) {
        let target = self.read(physics, settings) + steps * self.step();
        match self {
            Self::Physics(field) => {
                physics.set(field, target);
            }
            Self::LightIntensity(index) => {
                settings.set_light_intensity(index, target);
            }
            Self::PixelSize => {
                settings.set_pixel_size(target.round().max(0.0) as u32);
            }
            Self::NormalEdgeStrength => {
                settings.set_normal_edge_strength(target);
            }
        }
    }

    pub fn format(self, value: f32) -> String {
        match self {
            Self::Physics(PhysicsField::RotationSpeed) => format!("{value:.3}"),
            Self::Physics(PhysicsField::WheelAnimationSpeed) => format!("{value:.1}"),
            Self::Physics(_) | Self::NormalEdgeStrength => format!("{value:.2}"),
            Self::LightIntensity(_) | Self::PixelSize => format!("{value:.0}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel() {
        let settings = DebugSettings::default();
        assert_eq!(settings.light_intensities, [200.0, 200.0, 20.0]);
        assert!(settings.show_scene);
        assert!(!settings.show_axes);
        assert!(!settings.show_light_markers);
        assert_eq!(settings.normal_edge_strength, 0.3);
    }

    #[test]
    fn light_intensity_is_clamped() {
        let mut settings = DebugSettings::default();
        assert_eq!(settings.set_light_intensity(0, 350.0), Some(200.0));
        assert_eq!(settings.set_light_intensity(2, -1.0), Some(0.0));
        assert_eq!(settings.set_light_intensity(3, 10.0), None);
        assert_eq!(settings.set_light_intensity(1, f32::INFINITY), None);
        assert_eq!(settings.light_intensities, [200.0, 200.0, 0.0]);
    }

    #[test]
    fn pixel_size_is_clamped() {
        let mut settings = DebugSettings::default();
        assert_eq!(settings.set_pixel_size(0), 1);
        assert_eq!(settings.set_pixel_size(40), 16);
        assert_eq!(settings.set_pixel_size(7), 7);
    }

    #[test]
    fn edge_strength_snaps_to_step() {
        let mut settings = DebugSettings::default();
        let snapped = settings.set_normal_edge_strength(0.33).unwrap();
        assert!((snapped - 0.35).abs() < 1e-5);
        assert_eq!(settings.set_normal_edge_strength(5.0), Some(2.0));
        assert_eq!(settings.set_normal_edge_strength(f32::NAN), None);
    }

    #[test]
    fn visibility_targets_parse() {
        assert_eq!(VisibilityTarget::from_string("Axes"), Some(VisibilityTarget::Axes));
        assert_eq!(
            VisibilityTarget::from_string("light_markers"),
            Some(VisibilityTarget::LightMarkers)
        );
        assert_eq!(VisibilityTarget::from_string("ground"), None);
    }

    #[test]
    fn nudge_moves_by_step_and_clamps() {
        let mut physics = PhysicsParams::default();
        let mut settings = DebugSettings::default();

        PanelSetting::Physics(PhysicsField::RotationSpeed).nudge(1.0, &mut physics, &mut settings);
        assert!((physics.rotation_speed - 0.006).abs() < 1e-6);

        PanelSetting::LightIntensity(0).nudge(1.0, &mut physics, &mut settings);
        assert_eq!(settings.light_intensities[0], 200.0);

        PanelSetting::PixelSize.nudge(-10.0, &mut physics, &mut settings);
        assert_eq!(settings.pixel_size, 1);
    }
}
