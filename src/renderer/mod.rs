pub mod camera;
pub mod gpu;

pub use camera::{Camera, CameraMode};
pub use gpu::{GpuState, VIEW_CUBE_HALF, generate_bounds_vertices};
