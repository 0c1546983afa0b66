use bevy::prelude::*;
use constants::ride::{LEAF_SWAY_AMPLITUDE, LEAF_SWAY_FREQUENCY};

/// Leaf cluster that sways about its local Y axis.
#[derive(Component, Debug, Default)]
pub struct LeafCluster;

/// Leaf clusters to animate, collected once when the tree rings are spawned.
#[derive(Resource, Debug, Default)]
pub struct SwayRegistry {
    entities: Vec<Entity>,
}

impl SwayRegistry {
    pub fn register(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Sway angle for an absolute elapsed time in seconds.
pub fn leaf_sway(elapsed_secs: f32) -> f32 {
    (elapsed_secs * LEAF_SWAY_FREQUENCY).sin() * LEAF_SWAY_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn sway_starts_at_rest() {
        assert_eq!(leaf_sway(0.0), 0.0);
    }

    #[test]
    fn sway_peaks_at_amplitude() {
        // sin(t * 0.5) peaks at t = pi
        assert!((leaf_sway(PI) - 0.1).abs() < 1e-6);
        assert!((leaf_sway(3.0 * PI) + 0.1).abs() < 1e-6);
    }

    #[test]
    fn sway_is_bounded() {
        for i in 0..1000 {
            assert!(leaf_sway(i as f32 * 0.37).abs() <= 0.1 + 1e-6);
        }
    }
}
