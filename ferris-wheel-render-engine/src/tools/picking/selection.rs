use super::ray::nearest_hit;
use crate::engine::camera::RideCamera;
use crate::engine::ride::{CabinId, PickOutcome, RideControl};
use crate::gui::state::UiPointerCapture;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::Serialize;

/// Full extents of a cabin's pick volume, in the cabin's local frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct CabinBounds(pub Vec3);

/// Materials a cabin swaps between when hovered.
#[derive(Component, Debug, Clone)]
pub struct CabinMaterials {
    pub base: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
}

#[derive(Resource, Debug, Default)]
pub struct HoverState {
    pub hovered: Option<Entity>,
}

/// Which button started a pick. Both run the same pick procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickTrigger {
    Primary,
    Secondary,
}

impl PickTrigger {
    pub fn from_buttons(buttons: &ButtonInput<MouseButton>) -> Option<Self> {
        if buttons.just_pressed(MouseButton::Left) {
            Some(Self::Primary)
        } else if buttons.just_pressed(MouseButton::Right) {
            Some(Self::Secondary)
        } else {
            None
        }
    }
}

/// Ray from the camera through the cursor, if the cursor is over the window.
pub fn cursor_ray(window: &Window, camera: &Camera, cam_xf: &GlobalTransform) -> Option<Ray3d> {
    let cursor_pos = window.cursor_position()?;
    camera.viewport_to_world(cam_xf, cursor_pos).ok()
}

/// Button that starts a pick this frame, unless the pointer is over the panel.
pub fn pick_request(
    buttons: &ButtonInput<MouseButton>,
    capture: &UiPointerCapture,
) -> Option<PickTrigger> {
    if capture.pointer_over_ui {
        return None;
    }
    PickTrigger::from_buttons(buttons)
}

/// Apply a hit test to the selection. Only a successful lock marks the
/// control as changed and notifies the host.
pub fn commit_pick(
    control: &mut impl DetectChangesMut<Inner = RideControl>,
    hit: Option<CabinId>,
    trigger: PickTrigger,
    rpc_interface: &mut WebRpcInterface,
) -> PickOutcome {
    let outcome = control.bypass_change_detection().attempt_pick(hit);
    match outcome {
        PickOutcome::Locked(id) => {
            control.set_changed();
            info!("Cabin {} selected ({:?}), camera locked", id.0, trigger);
            rpc_interface.send_notification(
                "cabin_selected",
                serde_json::json!({
                    "cabin": id.0,
                    "trigger": trigger,
                }),
            );
        }
        PickOutcome::IgnoredWhileLocked => {
            debug!("Pick ignored ({:?}): already riding a cabin", trigger);
        }
        PickOutcome::Miss => {
            debug!("Pick missed ({:?})", trigger);
        }
    }
    outcome
}

// Left and right click both try to lock onto the cabin under the cursor
pub fn handle_pick_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    capture: Res<UiPointerCapture>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<RideCamera>>,
    cabins: Query<(&CabinId, &GlobalTransform, &CabinBounds)>,
    mut control: ResMut<RideControl>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(trigger) = pick_request(&buttons, &capture) else {
        return;
    };

    let hit = windows
        .single()
        .ok()
        .zip(cameras.single().ok())
        .and_then(|(window, (cam_xf, camera))| cursor_ray(window, camera, cam_xf))
        .and_then(|ray| {
            nearest_hit(
                ray.origin,
                ray.direction.as_vec3(),
                cabins.iter().map(|(id, xf, bounds)| (*id, *xf, bounds.0)),
            )
        })
        .map(|(id, _)| id);

    commit_pick(&mut control, hit, trigger, &mut rpc_interface);
}

// Highlight the cabin under the cursor while in free mode
pub fn update_hover_highlight(
    mut cursor_moves: EventReader<CursorMoved>,
    control: Res<RideControl>,
    capture: Res<UiPointerCapture>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<RideCamera>>,
    cabins: Query<(Entity, &GlobalTransform, &CabinBounds)>,
    mut hover: ResMut<HoverState>,
    mut cabin_materials: Query<(&CabinMaterials, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let moved = cursor_moves.read().count() > 0;
    if !moved && !control.is_changed() {
        return;
    }

    let target = if control.selected().is_some() || capture.pointer_over_ui {
        None
    } else {
        windows
            .single()
            .ok()
            .zip(cameras.single().ok())
            .and_then(|(window, (cam_xf, camera))| cursor_ray(window, camera, cam_xf))
            .and_then(|ray| {
                nearest_hit(
                    ray.origin,
                    ray.direction.as_vec3(),
                    cabins.iter().map(|(e, xf, bounds)| (e, *xf, bounds.0)),
                )
            })
            .map(|(e, _)| e)
    };

    set_hover_target(&mut hover, target, &mut cabin_materials);
}

/// Swap materials so that only `target` shows the highlight.
pub fn set_hover_target(
    hover: &mut HoverState,
    target: Option<Entity>,
    cabin_materials: &mut Query<(&CabinMaterials, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if hover.hovered == target {
        return;
    }

    if let Some(previous) = hover.hovered {
        if let Ok((materials, mut material)) = cabin_materials.get_mut(previous) {
            material.0 = materials.base.clone();
        }
    }
    if let Some(next) = target {
        if let Ok((materials, mut material)) = cabin_materials.get_mut(next) {
            material.0 = materials.highlight.clone();
        }
    }
    hover.hovered = target;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn cabin_with_materials(world: &mut World, materials: &mut Assets<StandardMaterial>) -> Entity {
        let base = materials.add(StandardMaterial::default());
        let highlight = materials.add(StandardMaterial {
            emissive: LinearRgba::WHITE,
            ..default()
        });
        world
            .spawn((
                MeshMaterial3d(base.clone()),
                CabinMaterials { base, highlight },
            ))
            .id()
    }

    fn current(world: &World, entity: Entity) -> Handle<StandardMaterial> {
        world
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .map(|m| m.0.clone())
            .unwrap()
    }

    fn hover(world: &mut World, target: Option<Entity>) {
        world
            .run_system_once(
                move |mut hover: ResMut<HoverState>,
                      mut q: Query<(&CabinMaterials, &mut MeshMaterial3d<StandardMaterial>)>| {
                    set_hover_target(&mut hover, target, &mut q);
                },
            )
            .unwrap();
    }

    #[test]
    fn hover_moves_highlight_between_cabins() {
        let mut world = World::new();
        world.init_resource::<HoverState>();
        let mut materials = Assets::<StandardMaterial>::default();
        let a = cabin_with_materials(&mut world, &mut materials);
        let b = cabin_with_materials(&mut world, &mut materials);
        let a_materials = world.get::<CabinMaterials>(a).cloned().unwrap();
        let b_materials = world.get::<CabinMaterials>(b).cloned().unwrap();

        hover(&mut world, Some(a));
        assert_eq!(current(&world, a), a_materials.highlight);

        hover(&mut world, Some(b));
        assert_eq!(current(&world, a), a_materials.base);
        assert_eq!(current(&world, b), b_materials.highlight);

        hover(&mut world, None);
        assert_eq!(current(&world, b), b_materials.base);
        assert!(world.resource::<HoverState>().hovered.is_none());
    }

    #[test]
    fn trigger_reads_either_button() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        assert_eq!(PickTrigger::from_buttons(&buttons), None);
        buttons.press(MouseButton::Right);
        assert_eq!(PickTrigger::from_buttons(&buttons), Some(PickTrigger::Secondary));
        buttons.clear();
        buttons.press(MouseButton::Left);
        assert_eq!(PickTrigger::from_buttons(&buttons), Some(PickTrigger::Primary));
    }

    #[test]
    fn clicks_over_panel_do_not_pick() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        let mut capture = UiPointerCapture::default();
        assert_eq!(pick_request(&buttons, &capture), Some(PickTrigger::Primary));

        capture.pointer_over_ui = true;
        assert_eq!(pick_request(&buttons, &capture), None);
    }

    fn commit(world: &mut World, hit: Option<CabinId>) -> PickOutcome {
        world
            .run_system_once(
                move |mut control: ResMut<RideControl>, mut rpc: ResMut<WebRpcInterface>| {
                    commit_pick(&mut control, hit, PickTrigger::Secondary, &mut rpc)
                },
            )
            .unwrap()
    }

    #[test]
    fn only_a_lock_marks_control_changed_and_notifies() {
        let mut world = World::new();
        world.init_resource::<RideControl>();
        world.init_resource::<WebRpcInterface>();
        world.clear_trackers();

        assert_eq!(commit(&mut world, None), PickOutcome::Miss);
        assert!(!world.is_resource_changed::<RideControl>());
        assert!(world.resource::<WebRpcInterface>().pending_notifications().is_empty());

        assert_eq!(commit(&mut world, Some(CabinId(4))), PickOutcome::Locked(CabinId(4)));
        assert!(world.is_resource_changed::<RideControl>());
        let notifications = world.resource::<WebRpcInterface>().pending_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].method, "cabin_selected");
        assert_eq!(notifications[0].params["cabin"], 4);
        assert_eq!(notifications[0].params["trigger"], "secondary");

        world.clear_trackers();
        assert_eq!(
            commit(&mut world, Some(CabinId(1))),
            PickOutcome::IgnoredWhileLocked
        );
        assert!(!world.is_resource_changed::<RideControl>());
        assert_eq!(world.resource::<RideControl>().selected(), Some(CabinId(4)));
        assert_eq!(
            world.resource::<WebRpcInterface>().pending_notifications().len(),
            1
        );
    }
}
