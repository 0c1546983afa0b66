use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the ride preset, then building the scene.
    #[default]
    Loading,
    /// Scene built; ride tick, input and camera systems active.
    Running,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct ControlsBanner;

// Final transition once the scene exists
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_built {
        info!("→ Scene built, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
