use crate::gui::settings::DebugSettings;
use bevy::prelude::*;
use constants::scene::{AXES_LENGTH, WHEEL_CENTER};

// X red, Y green, Z blue, drawn at the wheel centre when enabled
pub fn draw_axes_helper(mut gizmos: Gizmos, settings: Res<DebugSettings>) {
    if settings.show_axes {
        gizmos.axes(Transform::from_translation(WHEEL_CENTER), AXES_LENGTH);
    }
}
