use super::RideCamera;
use super::orbit_camera::OrbitCamera;
use crate::engine::ride::RideControl;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::scene::{CAMERA_HOME, WHEEL_CENTER};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetSource {
    Keyboard,
    Rpc,
}

/// Request to leave the cabin and return the camera to its home pose.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetCameraEvent {
    pub source: ResetSource,
}

/// Camera at its home position looking at the wheel centre.
pub fn home_transform() -> Transform {
    Transform::from_translation(CAMERA_HOME).looking_at(WHEEL_CENTER, Vec3::Y)
}

pub fn reset_key_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reset_events: EventWriter<ResetCameraEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyX) {
        reset_events.write(ResetCameraEvent {
            source: ResetSource::Keyboard,
        });
    }
}

pub fn apply_camera_reset(
    mut reset_events: EventReader<ResetCameraEvent>,
    mut control: ResMut<RideControl>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<RideCamera>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    // Several resets in one frame collapse into one.
    let Some(event) = reset_events.read().last().copied() else {
        return;
    };

    let released = control.reset();
    *orbit = OrbitCamera::home();
    for mut camera_transform in &mut camera_query {
        *camera_transform = home_transform();
    }

    match released {
        Some(id) => info!("Camera reset ({:?}): left cabin {}", event.source, id.0),
        None => info!("Camera reset ({:?})", event.source),
    }
    rpc_interface.send_notification(
        "camera_reset",
        serde_json::json!({
            "source": event.source,
            "released_cabin": released.map(|id| id.0),
        }),
    );
}
