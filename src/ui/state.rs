use crate::renderer::CameraMode;

pub const DEFAULT_RESOLUTION: u32 = 5;

pub struct UiState {
    pub selected_source: Option<usize>,
    pub custom_file: Option<String>,

    pub resolution: u32,

    pub camera_mode: CameraMode,
    pub show_bounds: bool,
    pub vsync_enabled: bool,
    pub show_stats: bool,

    pub patch_count: usize,
    pub triangle_count: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_source: None,
            custom_file: None,

            resolution: DEFAULT_RESOLUTION,

            camera_mode: CameraMode::Orbital,
            show_bounds: true,
            vsync_enabled: true,
            show_stats: true,

            patch_count: 0,
            triangle_count: 0,
        }
    }
}
