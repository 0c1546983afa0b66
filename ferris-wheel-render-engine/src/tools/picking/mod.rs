//! Cabin picking and hover feedback.
//!
//! The cursor is turned into a world ray through the ride camera and tested
//! against every cabin's oriented pick box; the nearest hit wins.
//!
//! ## Triggers
//!
//! - Left and right click: attempt to lock the camera onto the hit cabin.
//!   Both buttons run the same procedure; the button is only reported.
//! - Cursor movement: moves the hover highlight. Never changes the selection.
//!
//! Picks are ignored while the pointer is over the debug panel, and while a
//! cabin is already selected (see [`RideControl::attempt_pick`]).
//!
//! [`RideControl::attempt_pick`]: crate::engine::ride::RideControl::attempt_pick

/// Slab-method ray intersection against oriented boxes.
pub mod ray;

/// Click and hover systems plus the cabin pick components.
pub mod selection;

use crate::engine::core::app_state::AppState;
use bevy::prelude::*;
use selection::{HoverState, handle_pick_clicks, update_hover_highlight};

pub use selection::{CabinBounds, CabinMaterials};

pub struct PickingToolPlugin;

impl Plugin for PickingToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>().add_systems(
            Update,
            (handle_pick_clicks, update_hover_highlight)
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }
}
