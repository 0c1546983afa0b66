use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Unavailable,
}

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub preset_resolved: bool,
    pub scene_built: bool,
    pub texture_states: Vec<(String, TextureStatus)>,
}

impl LoadingProgress {
    pub fn texture_status(&self, path: &str) -> TextureStatus {
        self.texture_states
            .iter()
            .find(|(p, _)| p == path)
            .map_or(TextureStatus::Pending, |(_, status)| *status)
    }

    pub fn set_texture_status(&mut self, path: &str, status: TextureStatus) {
        match self.texture_states.iter_mut().find(|(p, _)| p == path) {
            Some((_, slot)) => *slot = status,
            None => self.texture_states.push((path.to_string(), status)),
        }
    }
}
