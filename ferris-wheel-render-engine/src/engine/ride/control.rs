use super::wheel::CabinId;
use bevy::prelude::*;
use serde::Serialize;

/// Camera control mode. `Locked` exactly when a cabin is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// Orbit controls drive the camera, cursor is free.
    #[default]
    Free,
    /// Camera rides the selected cabin with pointer-lock look.
    Locked,
}

/// Result of a pick attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The hit cabin is now selected and the mode switched to `Locked`.
    Locked(CabinId),
    /// Already riding a cabin. Selection unchanged.
    IgnoredWhileLocked,
    /// Nothing under the cursor. Selection unchanged.
    Miss,
}

/// Selection state and the mode derived from it.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct RideControl {
    selected: Option<CabinId>,
}

impl RideControl {
    pub fn selected(&self) -> Option<CabinId> {
        self.selected
    }

    pub fn mode(&self) -> CameraMode {
        if self.selected.is_some() {
            CameraMode::Locked
        } else {
            CameraMode::Free
        }
    }

    /// Apply the result of a hit test. Only `Free -> Locked` is a transition;
    /// picks while locked are ignored.
    pub fn attempt_pick(&mut self, hit: Option<CabinId>) -> PickOutcome {
        if self.selected.is_some() {
            return PickOutcome::IgnoredWhileLocked;
        }
        match hit {
            Some(id) => {
                self.selected = Some(id);
                PickOutcome::Locked(id)
            }
            None => PickOutcome::Miss,
        }
    }

    /// Clear the selection and return to `Free`. Returns the cabin that was
    /// being ridden, if any.
    pub fn reset(&mut self) -> Option<CabinId> {
        self.selected.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_free_without_selection() {
        let control = RideControl::default();
        assert_eq!(control.mode(), CameraMode::Free);
        assert_eq!(control.selected(), None);
    }

    #[test]
    fn successful_pick_locks_once() {
        let mut control = RideControl::default();
        assert_eq!(control.attempt_pick(Some(CabinId(3))), PickOutcome::Locked(CabinId(3)));
        assert_eq!(control.mode(), CameraMode::Locked);
        assert_eq!(control.selected(), Some(CabinId(3)));
    }

    #[test]
    fn pick_while_locked_is_a_no_op() {
        let mut control = RideControl::default();
        let _ = control.attempt_pick(Some(CabinId(1)));
        let before = control.clone();
        assert_eq!(control.attempt_pick(Some(CabinId(5))), PickOutcome::IgnoredWhileLocked);
        assert_eq!(control.attempt_pick(None), PickOutcome::IgnoredWhileLocked);
        assert_eq!(control, before);
    }

    #[test]
    fn miss_leaves_state_unchanged() {
        let mut control = RideControl::default();
        assert_eq!(control.attempt_pick(None), PickOutcome::Miss);
        assert_eq!(control.mode(), CameraMode::Free);
        assert_eq!(control.selected(), None);
    }

    #[test]
    fn reset_returns_to_free_from_any_state() {
        let mut control = RideControl::default();
        assert_eq!(control.reset(), None);
        assert_eq!(control.mode(), CameraMode::Free);

        let _ = control.attempt_pick(Some(CabinId(2)));
        assert_eq!(control.reset(), Some(CabinId(2)));
        assert_eq!(control.mode(), CameraMode::Free);
        assert_eq!(control.selected(), None);

        assert_eq!(control.attempt_pick(Some(CabinId(0))), PickOutcome::Locked(CabinId(0)));
    }
}
