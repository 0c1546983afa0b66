use crate::engine::ride::physics::PhysicsField;
use bevy::prelude::*;

use super::settings::{PanelSetting, VisibilityTarget};

// Resources
#[derive(Resource)]
pub struct DebugPanelUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for DebugPanelUiState {
    fn default() -> Self {
        Self {
            collapsed: true,
            open_width: 300.0,
            closed_width: 32.0,
        }
    }
}

/// Set while the pointer is over the panel so world input ignores it.
#[derive(Resource, Default)]
pub struct UiPointerCapture {
    pub pointer_over_ui: bool,
}

// Components
#[derive(Component)]
pub struct DebugPanelRoot;
#[derive(Component)]
pub struct DebugPanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;

/// `-` / `+` button nudging a numeric setting by the given number of steps.
#[derive(Component, Clone, Copy)]
pub struct StepButton {
    pub setting: PanelSetting,
    pub steps: f32,
}

/// Text showing a numeric setting's current value.
#[derive(Component, Clone, Copy)]
pub struct ValueLabel(pub PanelSetting);

/// On/off button for a visibility group.
#[derive(Component, Clone, Copy)]
pub struct ToggleButton(pub VisibilityTarget);

#[derive(Component, Clone, Copy)]
pub struct ToggleLabel(pub VisibilityTarget);

/// Panel folders and the numeric rows inside each.
pub fn panel_folders() -> Vec<(&'static str, Vec<PanelSetting>)> {
    vec![
        (
            "Physics",
            PhysicsField::ALL.into_iter().map(PanelSetting::Physics).collect(),
        ),
        (
            "Light Settings",
            (0..3).map(PanelSetting::LightIntensity).collect(),
        ),
        ("Other Settings", Vec::new()),
        (
            "Post Processing",
            vec![PanelSetting::PixelSize, PanelSetting::NormalEdgeStrength],
        ),
    ]
}
