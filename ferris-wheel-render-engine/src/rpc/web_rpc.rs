use crate::engine::camera::reset::{ResetCameraEvent, ResetSource};
use crate::engine::ride::physics::PhysicsField;
use crate::engine::ride::{PhysicsParams, RideControl, WheelAssembly};
use crate::engine::systems::fps_tracking::current_fps;
use crate::gui::settings::{DebugSettings, VisibilityTarget};
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
            return;
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Everything a request handler may read or change.
pub struct RpcContext<'a> {
    pub physics: &'a mut PhysicsParams,
    pub settings: &'a mut DebugSettings,
    pub control: &'a RideControl,
    pub assembly: Option<&'a WheelAssembly>,
    pub fps: Option<f64>,
    /// Set when a `reset_camera` request was accepted.
    pub reset_requested: bool,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut physics: ResMut<PhysicsParams>,
    mut settings: ResMut<DebugSettings>,
    control: Res<RideControl>,
    assembly: Option<Res<WheelAssembly>>,
    mut reset_events: EventWriter<ResetCameraEvent>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);

                let mut ctx = RpcContext {
                    physics: &mut physics,
                    settings: &mut settings,
                    control: &control,
                    assembly: assembly.as_deref(),
                    fps: current_fps(&diagnostics),
                    reset_requested: false,
                };
                let response = handle_rpc_request(&request, &mut ctx);

                if ctx.reset_requested {
                    reset_events.write(ResetCameraEvent {
                        source: ResetSource::Rpc,
                    });
                }
                if let Some(response) = response {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request. Requests without an ID are executed but get no response.
pub fn handle_rpc_request(request: &RpcRequest, ctx: &mut RpcContext) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_settings" => handle_get_settings(ctx),
        "set_physics" => handle_set_physics(&request.params, ctx),
        "set_light_intensity" => handle_set_light_intensity(&request.params, ctx),
        "set_visibility" => handle_set_visibility(&request.params, ctx),
        "set_post_processing" => handle_set_post_processing(&request.params, ctx),
        "reset_camera" => handle_reset_camera(ctx),
        "get_ride_state" => handle_get_ride_state(ctx),
        "get_fps" => handle_get_fps(ctx),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return request.id.clone().map(|id| {
                create_error_response(
                    id,
                    -32601,
                    "Method not found",
                    Some(serde_json::json!({"method": request.method})),
                )
            });
        }
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn settings_snapshot(ctx: &RpcContext) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "physics": *ctx.physics,
        "settings": *ctx.settings,
    }))
}

fn handle_get_settings(ctx: &mut RpcContext) -> Result<serde_json::Value, RpcError> {
    settings_snapshot(ctx)
}

/// Partial update: any subset of the physics fields. Validated as a whole before applying.
fn handle_set_physics(
    params: &serde_json::Value,
    ctx: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    let map = params
        .as_object()
        .ok_or_else(|| RpcError::invalid_params("Expected an object of physics values"))?;

    let mut updates = Vec::with_capacity(map.len());
    for (key, value) in map {
        let field = serde_json::from_value::<PhysicsField>(serde_json::Value::String(key.clone()))
            .map_err(|_| RpcError::invalid_params(&format!("Unknown physics parameter: {key}")))?;
        let number = value
            .as_f64()
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
            .ok_or_else(|| RpcError::invalid_params(&format!("'{key}' must be a finite number")))?;
        updates.push((field, number));
    }

    for (field, number) in updates {
        ctx.physics.set(field, number);
    }
    info!("Physics updated via RPC: {:?}", ctx.physics);

    Ok(serde_json::json!({
        "success": true,
        "physics": *ctx.physics
    }))
}

fn handle_set_light_intensity(
    params: &serde_json::Value,
    ctx: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct LightParams {
        index: usize,
        intensity: f32,
    }

    let parsed = serde_json::from_value::<LightParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' and 'intensity' parameters"))?;

    let applied = ctx
        .settings
        .set_light_intensity(parsed.index, parsed.intensity)
        .ok_or_else(|| {
            RpcError::invalid_params(&format!("Unknown light index: {}", parsed.index))
        })?;

    Ok(serde_json::json!({
        "success": true,
        "index": parsed.index,
        "intensity": applied
    }))
}

fn handle_set_visibility(
    params: &serde_json::Value,
    ctx: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct VisibilityParams {
        target: String,
        visible: bool,
    }

    let parsed = serde_json::from_value::<VisibilityParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'target' and 'visible' parameters"))?;

    let target = VisibilityTarget::from_string(&parsed.target).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown visibility target: {}", parsed.target))
    })?;
    ctx.settings.set_visibility(target, parsed.visible);

    Ok(serde_json::json!({
        "success": true,
        "target": target,
        "visible": parsed.visible
    }))
}

fn handle_set_post_processing(
    params: &serde_json::Value,
    ctx: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct PostProcessingParams {
        pixel_size: Option<u32>,
        normal_edge_strength: Option<f32>,
    }

    let parsed = serde_json::from_value::<PostProcessingParams>(params.clone()).map_err(|_| {
        RpcError::invalid_params("Expected 'pixel_size' and/or 'normal_edge_strength'")
    })?;

    if parsed
        .normal_edge_strength
        .is_some_and(|strength| !strength.is_finite())
    {
        return Err(RpcError::invalid_params("'normal_edge_strength' must be finite"));
    }

    if let Some(size) = parsed.pixel_size {
        ctx.settings.set_pixel_size(size);
    }
    if let Some(strength) = parsed.normal_edge_strength {
        ctx.settings.set_normal_edge_strength(strength);
    }

    Ok(serde_json::json!({
        "success": true,
        "pixel_size": ctx.settings.pixel_size,
        "normal_edge_strength": ctx.settings.normal_edge_strength
    }))
}

fn handle_reset_camera(ctx: &mut RpcContext) -> Result<serde_json::Value, RpcError> {
    ctx.reset_requested = true;
    Ok(serde_json::json!({
        "success": true
    }))
}

fn handle_get_ride_state(ctx: &mut RpcContext) -> Result<serde_json::Value, RpcError> {
    let assembly = ctx
        .assembly
        .ok_or_else(|| RpcError::internal_error("Scene not built yet"))?;

    Ok(serde_json::json!({
        "mode": ctx.control.mode(),
        "selected_cabin": ctx.control.selected().map(|id| id.0),
        "wheel_angle": assembly.angle(),
        "cabin_count": assembly.cabins().len()
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(ctx: &mut RpcContext) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "fps": ctx.fps.unwrap_or(0.0) as f32
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
