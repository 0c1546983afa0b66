use bevy::prelude::*;
use constants::ride::*;
use serde::{Deserialize, Serialize};

/// Physics parameters consumed by the ride tick.
///
/// Values are plain scalars. Operator surfaces (panel, RPC) go through
/// [`PhysicsParams::set`], which rejects non-finite input and clamps to the
/// panel range.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub swing_amplitude: f32,
    pub swing_speed: f32,
    pub rotation_speed: f32,
    pub wheel_animation_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            swing_amplitude: DEFAULT_SWING_AMPLITUDE,
            swing_speed: DEFAULT_SWING_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            wheel_animation_speed: DEFAULT_WHEEL_ANIMATION_SPEED,
        }
    }
}

/// Names of the individual physics parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsField {
    SwingAmplitude,
    SwingSpeed,
    RotationSpeed,
    WheelAnimationSpeed,
}

impl PhysicsField {
    pub const ALL: [PhysicsField; 4] = [
        Self::SwingAmplitude,
        Self::SwingSpeed,
        Self::RotationSpeed,
        Self::WheelAnimationSpeed,
    ];

    pub fn range(self) -> (f32, f32) {
        match self {
            Self::SwingAmplitude => SWING_AMPLITUDE_RANGE,
            Self::SwingSpeed => SWING_SPEED_RANGE,
            Self::RotationSpeed => ROTATION_SPEED_RANGE,
            Self::WheelAnimationSpeed => WHEEL_ANIMATION_SPEED_RANGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SwingAmplitude => "Swing Amplitude",
            Self::SwingSpeed => "Swing Speed",
            Self::RotationSpeed => "Rotation Speed",
            Self::WheelAnimationSpeed => "Wheel Animation Speed",
        }
    }
}

impl PhysicsParams {
    pub fn get(&self, field: PhysicsField) -> f32 {
        match field {
            PhysicsField::SwingAmplitude => self.swing_amplitude,
            PhysicsField::SwingSpeed => self.swing_speed,
            PhysicsField::RotationSpeed => self.rotation_speed,
            PhysicsField::WheelAnimationSpeed => self.wheel_animation_speed,
        }
    }

    /// Set a parameter, clamped to its panel range. Returns the stored value,
    /// or `None` when `value` is not finite (the parameter is left untouched).
    pub fn set(&mut self, field: PhysicsField, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let (min, max) = field.range();
        let value = value.clamp(min, max);
        let slot = match field {
            PhysicsField::SwingAmplitude => &mut self.swing_amplitude,
            PhysicsField::SwingSpeed => &mut self.swing_speed,
            PhysicsField::RotationSpeed => &mut self.rotation_speed,
            PhysicsField::WheelAnimationSpeed => &mut self.wheel_animation_speed,
        };
        *slot = value;
        Some(value)
    }

    /// Copy of `self` with every field clamped into range and non-finite
    /// fields replaced by their defaults. Used when a preset is applied.
    pub fn sanitised(self) -> Self {
        let defaults = Self::default();
        let mut out = defaults;
        for field in PhysicsField::ALL {
            let _ = out.set(field, self.get(field));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let p = PhysicsParams::default();
        assert_eq!(p.swing_amplitude, 0.04);
        assert_eq!(p.swing_speed, 0.03);
        assert_eq!(p.rotation_speed, 0.005);
        assert_eq!(p.wheel_animation_speed, 1.5);
    }

    #[test]
    fn set_clamps_to_panel_range() {
        let mut p = PhysicsParams::default();
        assert_eq!(p.set(PhysicsField::RotationSpeed, 3.0), Some(0.2));
        assert_eq!(p.rotation_speed, 0.2);
        assert_eq!(p.set(PhysicsField::SwingSpeed, -1.0), Some(0.0));
        assert_eq!(p.set(PhysicsField::WheelAnimationSpeed, -4.5), Some(-4.5));
    }

    #[test]
    fn set_rejects_non_finite_values() {
        let mut p = PhysicsParams::default();
        assert_eq!(p.set(PhysicsField::SwingAmplitude, f32::NAN), None);
        assert_eq!(p.set(PhysicsField::SwingAmplitude, f32::INFINITY), None);
        assert_eq!(p.swing_amplitude, 0.04);
    }

    #[test]
    fn sanitised_replaces_bad_fields() {
        let raw = PhysicsParams {
            swing_amplitude: f32::NAN,
            swing_speed: 5.0,
            rotation_speed: -0.01,
            wheel_animation_speed: 2.0,
        };
        let clean = raw.sanitised();
        assert_eq!(clean.swing_amplitude, 0.04);
        assert_eq!(clean.swing_speed, 0.2);
        assert_eq!(clean.rotation_speed, -0.01);
        assert_eq!(clean.wheel_animation_speed, 2.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: PhysicsParams = serde_json::from_str(r#"{"rotation_speed": 0.01}"#).unwrap();
        assert_eq!(p.rotation_speed, 0.01);
        assert_eq!(p.swing_speed, 0.03);
    }
}
