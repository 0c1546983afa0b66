use super::settings::{DebugSettings, PanelSetting, VisibilityTarget};
use super::state::*;
use crate::engine::ride::PhysicsParams;
use bevy::prelude::*;

const BUTTON_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
const TEXT_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);

// Spawns the debug panel with a collapsible header and one section per folder
pub fn spawn_debug_panel(
    mut commands: Commands,
    state: Res<DebugPanelUiState>,
    physics: Res<PhysicsParams>,
    settings: Res<DebugSettings>,
) {
    let width = if state.collapsed { state.closed_width } else { state.open_width };
    let body_display = if state.collapsed { Display::None } else { Display::Flex };

    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            Interaction::default(),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    HeaderNode,
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(if state.collapsed { 4.0 } else { 10.0 })),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed {
                            JustifyContent::FlexEnd
                        } else {
                            JustifyContent::SpaceBetween
                        },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TitleText,
                        Text::new("Controls"),
                        TextFont { font_size: 18.0, ..default() },
                        TextColor(TEXT_COLOUR),
                        Node {
                            display: if state.collapsed { Display::None } else { Display::Flex },
                            ..default()
                        },
                    ));
                    header
                        .spawn((
                            CollapseButton,
                            Button,
                            BackgroundColor(BUTTON_COLOUR),
                            Node {
                                width: Val::Px(24.0),
                                height: Val::Px(24.0),
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                        ))
                        .with_children(|button| {
                            button.spawn((
                                CollapseLabel,
                                Text::new(if state.collapsed { "<" } else { ">" }),
                                TextFont { font_size: 16.0, ..default() },
                                TextColor(TEXT_COLOUR),
                            ));
                        });
                });

            parent
                .spawn((
                    DebugPanelBody,
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(8.0)),
                        row_gap: Val::Px(6.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                ))
                .with_children(|body| {
                    for (folder, rows) in panel_folders() {
                        spawn_folder_title(body, folder);
                        for setting in rows {
                            spawn_step_row(body, setting, setting.read(&physics, &settings));
                        }
                        if folder == "Other Settings" {
                            for target in VisibilityTarget::ALL {
                                spawn_toggle_row(body, target, settings.visibility(target));
                            }
                        }
                    }
                });
        });
}

fn spawn_folder_title(body: &mut ChildSpawnerCommands, title: &str) {
    body.spawn((
        Text::new(title),
        TextFont { font_size: 15.0, ..default() },
        TextColor(Color::srgb(0.65, 0.75, 0.95)),
        Node {
            margin: UiRect::top(Val::Px(6.0)),
            ..default()
        },
    ));
}

fn row_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::SpaceBetween,
        column_gap: Val::Px(6.0),
        ..default()
    }
}

fn small_button_node() -> Node {
    Node {
        width: Val::Px(22.0),
        height: Val::Px(22.0),
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        ..default()
    }
}

fn spawn_step_row(body: &mut ChildSpawnerCommands, setting: PanelSetting, value: f32) {
    body.spawn(row_node()).with_children(|row| {
        row.spawn((
            Text::new(setting.label()),
            TextFont { font_size: 13.0, ..default() },
            TextColor(TEXT_COLOUR),
            Node {
                flex_grow: 1.0,
                ..default()
            },
        ));
        for (symbol, steps) in [("-", -1.0), ("+", 1.0)] {
            if steps > 0.0 {
                row.spawn((
                    ValueLabel(setting),
                    Text::new(setting.format(value)),
                    TextFont { font_size: 13.0, ..default() },
                    TextColor(Color::srgb(0.9, 0.9, 0.6)),
                    Node {
                        min_width: Val::Px(48.0),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ));
            }
            row.spawn((
                StepButton { setting, steps },
                Button,
                BackgroundColor(BUTTON_COLOUR),
                small_button_node(),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new(symbol),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(TEXT_COLOUR),
                ));
            });
        }
    });
}

fn spawn_toggle_row(body: &mut ChildSpawnerCommands, target: VisibilityTarget, on: bool) {
    body.spawn(row_node()).with_children(|row| {
        row.spawn((
            Text::new(target.label()),
            TextFont { font_size: 13.0, ..default() },
            TextColor(TEXT_COLOUR),
        ));
        row.spawn((
            ToggleButton(target),
            Button,
            BackgroundColor(toggle_colour(on)),
            Node {
                width: Val::Px(48.0),
                height: Val::Px(22.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|button| {
            button.spawn((
                ToggleLabel(target),
                Text::new(toggle_text(on)),
                TextFont { font_size: 13.0, ..default() },
                TextColor(TEXT_COLOUR),
            ));
        });
    });
}

pub fn toggle_colour(on: bool) -> Color {
    if on { Color::srgb(0.18, 0.50, 0.25) } else { BUTTON_COLOUR }
}

pub fn toggle_text(on: bool) -> &'static str {
    if on { "On" } else { "Off" }
}

pub fn apply_collapse_state(
    state: Res<DebugPanelUiState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<DebugPanelRoot>>,
        Query<&mut Node, With<DebugPanelBody>>,
        Query<&mut Node, With<HeaderNode>>,
        Query<&mut Node, With<TitleText>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed { state.closed_width } else { state.open_width });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        n.padding = UiRect::all(Val::Px(if state.collapsed { 4.0 } else { 10.0 }));
        n.justify_content = if state.collapsed {
            JustifyContent::FlexEnd
        } else {
            JustifyContent::SpaceBetween
        };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { "<" } else { ">" });
    }
}

// Keep labels in sync with changes from the panel, RPC or preset
pub fn reflect_setting_values(
    physics: Res<PhysicsParams>,
    settings: Res<DebugSettings>,
    mut values: Query<(&ValueLabel, &mut Text), Without<ToggleLabel>>,
    mut toggle_labels: Query<(&ToggleLabel, &mut Text), Without<ValueLabel>>,
    mut toggle_buttons: Query<(&ToggleButton, &mut BackgroundColor)>,
) {
    if !physics.is_changed() && !settings.is_changed() {
        return;
    }

    for (ValueLabel(setting), mut text) in &mut values {
        let formatted = setting.format(setting.read(&physics, &settings));
        if text.0 != formatted {
            text.0 = formatted;
        }
    }
    for (ToggleLabel(target), mut text) in &mut toggle_labels {
        text.0 = toggle_text(settings.visibility(*target)).to_string();
    }
    for (ToggleButton(target), mut bg) in &mut toggle_buttons {
        *bg = BackgroundColor(toggle_colour(settings.visibility(*target)));
    }
}
