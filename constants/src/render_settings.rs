/// Panel ranges for the three point-light intensities.
pub const LIGHT_INTENSITY_RANGE: (f32, f32) = (0.0, 200.0);

/// Intensities applied when the panel is built.
pub const DEFAULT_LIGHT_INTENSITIES: [f32; 3] = [200.0, 200.0, 20.0];

/// Scale from panel intensity units to Bevy lumens.
pub const LUMENS_PER_INTENSITY_UNIT: f32 = 5_000.0;

pub const PIXEL_SIZE_RANGE: (u32, u32) = (1, 16);

/// Window width covered by one step of the responsive default pixel size.
pub const PIXEL_SIZE_WIDTH_DIVISOR: f32 = 384.0;

pub const NORMAL_EDGE_STRENGTH_RANGE: (f32, f32) = (0.0, 2.0);
pub const NORMAL_EDGE_STRENGTH_STEP: f32 = 0.05;
pub const DEFAULT_NORMAL_EDGE_STRENGTH: f32 = 0.3;
pub const DEFAULT_DEPTH_EDGE_STRENGTH: f32 = 0.4;

pub const SKY_COLOUR: u32 = 0x87ceeb;
pub const GRASS_COLOUR: u32 = 0x00ff00;
pub const LIGHT_MARKER_COLOUR: u32 = 0xffff00;
pub const HIGHLIGHT_EMISSIVE_STRENGTH: f32 = 4.0;

/// Responsive default pixel size: larger pixels on wider windows, never below 1.
pub fn default_pixel_size(window_width: f32) -> u32 {
    let size = (window_width / PIXEL_SIZE_WIDTH_DIVISOR).floor();
    (size.max(PIXEL_SIZE_RANGE.0 as f32) as u32).min(PIXEL_SIZE_RANGE.1)
}
