use super::settings::DebugSettings;
use super::state::*;
use super::ui::toggle_colour;
use crate::engine::ride::PhysicsParams;
use bevy::prelude::*;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CollapseButton>),
    >,
    mut state: ResMut<DebugPanelUiState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.collapsed = !state.collapsed;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// - / + buttons nudge their setting by one step
pub fn step_button_interaction(
    mut q: Query<
        (&Interaction, &StepButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut physics: ResMut<PhysicsParams>,
    mut settings: ResMut<DebugSettings>,
) {
    for (interaction, step, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                step.setting.nudge(step.steps, &mut physics, &mut settings);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Visibility buttons flip their group; colour reflects the current state
pub fn toggle_button_interaction(
    mut q: Query<
        (&Interaction, &ToggleButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut settings: ResMut<DebugSettings>,
) {
    for (interaction, ToggleButton(target), mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                let visible = !settings.visibility(*target);
                settings.set_visibility(*target, visible);
                *bg = BackgroundColor(toggle_colour(visible));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(toggle_colour(settings.visibility(*target))),
        }
    }
}

// Any panel node under the pointer blocks picking and orbit input
pub fn track_pointer_capture(
    interactions: Query<&Interaction, With<Node>>,
    mut capture: ResMut<UiPointerCapture>,
) {
    let over_ui = interactions.iter().any(|i| *i != Interaction::None);
    if capture.pointer_over_ui != over_ui {
        capture.pointer_over_ui = over_ui;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ride::physics::PhysicsField;
    use crate::gui::settings::{PanelSetting, VisibilityTarget};
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_settings() -> World {
        let mut world = World::new();
        world.init_resource::<PhysicsParams>();
        world.init_resource::<DebugSettings>();
        world
    }

    #[test]
    fn pressed_step_button_nudges_setting() {
        let mut world = world_with_settings();
        world.spawn((
            Button,
            Interaction::Pressed,
            BackgroundColor(Color::BLACK),
            StepButton {
                setting: PanelSetting::Physics(PhysicsField::SwingAmplitude),
                steps: 1.0,
            },
        ));

        world.run_system_once(step_button_interaction).unwrap();

        let amplitude = world.resource::<PhysicsParams>().swing_amplitude;
        assert!((amplitude - 0.05).abs() < 1e-6);
    }

    #[test]
    fn pressed_toggle_flips_visibility() {
        let mut world = world_with_settings();
        world.spawn((
            Button,
            Interaction::Pressed,
            BackgroundColor(Color::BLACK),
            ToggleButton(VisibilityTarget::Axes),
        ));

        world.run_system_once(toggle_button_interaction).unwrap();

        assert!(world.resource::<DebugSettings>().show_axes);
    }

    #[test]
    fn hovered_node_captures_pointer() {
        let mut world = World::new();
        world.init_resource::<UiPointerCapture>();
        let node = world.spawn((Node::default(), Interaction::Hovered)).id();

        world.run_system_once(track_pointer_capture).unwrap();
        assert!(world.resource::<UiPointerCapture>().pointer_over_ui);

        world.entity_mut(node).insert(Interaction::None);
        world.run_system_once(track_pointer_capture).unwrap();
        assert!(!world.resource::<UiPointerCapture>().pointer_over_ui);
    }
}
