pub mod basis;
pub mod engine;
pub mod mesh;
pub mod patch;

pub use engine::{SceneEngine, SceneResult, SceneSource};
pub use mesh::SceneMesh;
