use crate::engine::core::app_state::{AppState, ControlsBanner, FpsText, transition_to_running};
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::ride::DEFAULT_TICK_HZ;
use constants::scene::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
// Crate engine modules
use crate::engine::camera::RideCamera;
use crate::engine::camera::cabin_camera::{CabinLook, cabin_camera_follow, sync_cursor_grab};
use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller};
use crate::engine::camera::reset::{
    ResetCameraEvent, apply_camera_reset, home_transform, reset_key_system,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::preset_loader::{
    PresetLoader, RidePreset, resolve_ride_preset, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::check_texture_loading;
use crate::engine::render::pixelate_post_processing::{PixelatePostProcessPlugin, PixelateSettings};
use crate::engine::ride::{PhysicsParams, RideControl};
use crate::engine::scene::build_scene;
use crate::engine::scene::gizmos::draw_axes_helper;
use crate::engine::systems::animation::{advance_ride, sway_leaves};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::settings_sync::apply_debug_settings;
use crate::engine::systems::viewport::{ViewportSize, handle_viewport_resize};
// Crate tools, panel and RPC modules
use crate::gui::DebugPanelPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::picking::PickingToolPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

const CONTROLS_HINT: &str = "Click a cabin to ride it | Drag to orbit | Scroll to zoom | X to reset";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers RidePreset as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<RidePreset>::new(&["json"]))
        .add_plugins(PixelatePostProcessPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(PickingToolPlugin)
        .add_plugins(DebugPanelPlugin);

    // Initialise resources early
    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(DEFAULT_TICK_HZ))
        .init_resource::<LoadingProgress>()
        .init_resource::<PresetLoader>()
        .init_resource::<PhysicsParams>()
        .init_resource::<RideControl>()
        .init_resource::<OrbitCamera>()
        .init_resource::<CabinLook>()
        .init_resource::<ViewportSize>()
        .add_event::<ResetCameraEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (resolve_ride_preset, build_scene, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base systems that run in every state.
    app.add_systems(
        Update,
        (
            check_texture_loading,
            handle_viewport_resize,
            fps_notification_system,
        ),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    // Ride simulation advances on the fixed tick.
    app.add_systems(
        FixedUpdate,
        advance_ride.run_if(in_state(AppState::Running)),
    );

    // Runtime systems - only run when the scene is ready
    app.add_systems(
        Update,
        (
            (
                reset_key_system,
                apply_camera_reset,
                orbit_camera_controller,
                cabin_camera_follow,
                sync_cursor_grab,
            )
                .chain(),
            sway_leaves,
            apply_debug_settings,
            draw_axes_helper,
        )
            .run_if(in_state(AppState::Running)),
    );

    app
}

fn create_ride_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        home_transform(),
        PixelateSettings::default(),
        RideCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    create_ride_camera(&mut commands);
    create_controls_banner(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn create_controls_banner(commands: &mut Commands) {
    commands.spawn((
        Text::new(CONTROLS_HINT),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        ControlsBanner,
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
