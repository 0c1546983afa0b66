use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use bevy::window::WindowResized;

/// Last known size of the primary window, in logical pixels.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

// Bevy already updates projection aspect and render targets; record and report the size
pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(latest) = resize_events.read().last() else {
        return;
    };

    let size = ViewportSize {
        width: latest.width,
        height: latest.height,
    };
    if size == *viewport {
        return;
    }

    *viewport = size;
    debug!("Viewport resized to {}x{}", size.width, size.height);
    rpc_interface.send_notification(
        "viewport_resized",
        serde_json::json!({
            "width": size.width,
            "height": size.height
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_resize_wins() {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .init_resource::<ViewportSize>()
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, handle_viewport_resize);

        let window = app.world_mut().spawn_empty().id();
        for (width, height) in [(800.0, 600.0), (1280.0, 720.0)] {
            app.world_mut().send_event(WindowResized {
                window,
                width,
                height,
            });
        }
        app.update();

        assert_eq!(
            *app.world().resource::<ViewportSize>(),
            ViewportSize {
                width: 1280.0,
                height: 720.0
            }
        );
        assert_eq!(app.world().resource::<WebRpcInterface>().pending_notifications().len(), 1);
    }
}
