use super::physics::PhysicsParams;
use bevy::prelude::*;
use serde::Serialize;
use std::f32::consts::TAU;

/// Index of a cabin within its wheel. Stable for the lifetime of the scene.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CabinId(pub usize);

/// A passenger cabin. Orbits with the wheel but never spins with it; it only
/// tilts by its swing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cabin {
    base_angle: f32,
    swing_phase: f32,
}

impl Cabin {
    pub fn new(base_angle: f32) -> Self {
        Self {
            base_angle,
            swing_phase: 0.0,
        }
    }

    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn swing_phase(&self) -> f32 {
        self.swing_phase
    }

    /// Offset from the wheel centre for a given wheel angle.
    pub fn offset(&self, wheel_angle: f32, radius: f32) -> Vec3 {
        let (sin, cos) = (self.base_angle + wheel_angle).sin_cos();
        Vec3::new(radius * cos, radius * sin, 0.0)
    }

    /// Tilt about the wheel axis, bounded by `amplitude`.
    pub fn tilt(&self, amplitude: f32) -> f32 {
        self.swing_phase.sin() * amplitude
    }

    fn advance_swing(&mut self, swing_speed: f32) {
        self.swing_phase += swing_speed;
    }
}

/// The wheel: rotation angle plus the fixed, ordered set of cabins.
#[derive(Resource, Debug, Clone)]
pub struct WheelAssembly {
    center: Vec3,
    radius: f32,
    angle: f32,
    cabins: Vec<Cabin>,
}

impl WheelAssembly {
    /// Wheel with `cabin_count` cabins spaced evenly around the rim.
    pub fn new(center: Vec3, radius: f32, cabin_count: usize) -> Self {
        let cabins = (0..cabin_count)
            .map(|i| Cabin::new(i as f32 * TAU / cabin_count as f32))
            .collect();
        Self {
            center,
            radius,
            angle: 0.0,
            cabins,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulated wheel rotation in radians. Not wrapped.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn cabins(&self) -> &[Cabin] {
        &self.cabins
    }

    pub fn cabin(&self, id: CabinId) -> Option<&Cabin> {
        self.cabins.get(id.0)
    }

    /// World-space position of a cabin's centre.
    pub fn cabin_position(&self, id: CabinId) -> Option<Vec3> {
        self.cabin(id)
            .map(|cabin| self.center + cabin.offset(self.angle, self.radius))
    }

    /// Advance one tick: rotate by `rotation_speed`, then step every cabin's swing.
    pub fn tick(&mut self, physics: &PhysicsParams) {
        self.angle += physics.rotation_speed;
        for cabin in &mut self.cabins {
            cabin.advance_swing(physics.swing_speed);
        }
    }

    /// Transform for a cabin at the current wheel angle.
    pub fn cabin_transform(&self, id: CabinId, physics: &PhysicsParams) -> Option<Transform> {
        let cabin = self.cabin(id)?;
        Some(
            Transform::from_translation(self.center + cabin.offset(self.angle, self.radius))
                .with_rotation(Quat::from_rotation_z(cabin.tilt(physics.swing_amplitude))),
        )
    }
}
