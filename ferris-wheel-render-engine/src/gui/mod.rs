//! Debug control panel for the ride.
//!
//! A collapsible side panel (native only) exposing the same tunables the web
//! host reaches through RPC. Values live in [`DebugSettings`] and
//! [`PhysicsParams`](crate::engine::ride::PhysicsParams); the panel only
//! reads and nudges them, so RPC, the ride preset and the panel can never
//! disagree about the current value.
//!
//! ## Folders
//!
//! ```text
//! Physics          swing amplitude, swing speed, rotation speed, wheel animation speed
//! Light Settings   Light 1..3 intensity
//! Other Settings   scene / axes / light marker visibility
//! Post Processing  pixel size, normal edge strength
//! ```
//!
//! [`UiPointerCapture`] is registered on every platform. Picking and the
//! orbit controller consult it, and on the web it simply stays `false`.

/// Button handlers for stepping values, toggling groups and collapsing the panel.
pub mod interactions;

/// Debug settings resource and the numeric/visibility setting descriptors.
pub mod settings;

/// Panel state resource, pointer capture and panel marker components.
pub mod state;

/// Panel spawning and value reflection (native only).
pub mod ui;

use bevy::prelude::*;

pub use settings::DebugSettings;
pub use state::{DebugPanelUiState, UiPointerCapture};

#[cfg(not(target_arch = "wasm32"))]
use interactions::{
    collapse_button_interaction, step_button_interaction, toggle_button_interaction,
    track_pointer_capture,
};
#[cfg(not(target_arch = "wasm32"))]
use ui::{apply_collapse_state, reflect_setting_values, spawn_debug_panel};

// Registers the debug panel, its resources and systems.
pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugSettings>()
            .init_resource::<DebugPanelUiState>()
            .init_resource::<UiPointerCapture>();

        // Panel UI only for native builds.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                (
                    track_pointer_capture,
                    collapse_button_interaction,
                    apply_collapse_state,
                    step_button_interaction,
                    toggle_button_interaction,
                    reflect_setting_values,
                ),
            );
            app.add_systems(Startup, spawn_debug_panel);
        }
    }
}
