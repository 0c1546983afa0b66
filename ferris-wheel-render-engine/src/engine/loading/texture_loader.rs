use crate::engine::loading::progress::{LoadingProgress, TextureStatus};
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::asset::LoadState;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

pub const GRASS_TEXTURE_PATH: &str = "textures/grass.png";
pub const SKYBOX_TEXTURE_PATH: &str = "textures/skybox.png";

#[derive(Resource, Clone)]
pub struct SceneTextures {
    pub grass: Handle<Image>,
    pub skybox: Handle<Image>,
}

impl SceneTextures {
    pub fn entries(&self) -> [(&'static str, &Handle<Image>); 2] {
        [
            (GRASS_TEXTURE_PATH, &self.grass),
            (SKYBOX_TEXTURE_PATH, &self.skybox),
        ]
    }
}

/// Request the scene textures. The grass repeats across the ground, so it is
/// loaded with a repeating sampler.
pub fn load_scene_textures(asset_server: &AssetServer) -> SceneTextures {
    let grass = asset_server.load_with_settings(
        GRASS_TEXTURE_PATH,
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );
    let skybox = asset_server.load(SKYBOX_TEXTURE_PATH);

    SceneTextures { grass, skybox }
}

// Track texture completion; report each failure once
pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    textures: Option<Res<SceneTextures>>,
    asset_server: Res<AssetServer>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(textures) = textures else {
        return;
    };

    for (path, handle) in textures.entries() {
        if loading_progress.texture_status(path) != TextureStatus::Pending {
            continue;
        }

        match asset_server.get_load_state(handle) {
            Some(LoadState::Loaded) => {
                info!("✓ Texture loaded: {path}");
                loading_progress.set_texture_status(path, TextureStatus::Loaded);
            }
            Some(LoadState::Failed(err)) => {
                warn!("Asset unavailable: {path} ({err})");
                rpc_interface.send_notification(
                    "asset_unavailable",
                    serde_json::json!({
                        "asset": path,
                        "reason": err.to_string()
                    }),
                );
                loading_progress.set_texture_status(path, TextureStatus::Unavailable);
            }
            _ => {}
        }
    }
}
