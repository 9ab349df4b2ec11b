use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::bezier::mesh::SceneMesh;
use crate::bezier::patch::sample_surface;
use crate::patchfile::{self, BUILTIN_SOURCES, LoadError};

#[derive(Clone)]
pub enum SceneSource {
    Builtin(usize),
    File(PathBuf),
}

impl SceneSource {
    pub fn label(&self) -> String {
        match self {
            SceneSource::Builtin(i) => BUILTIN_SOURCES[*i].name.to_string(),
            SceneSource::File(path) => path.display().to_string(),
        }
    }
}

pub enum SceneCommand {
    Load {
        source: SceneSource,
        resolution: usize,
    },
    Stop,
}

pub enum SceneResult {
    Scene(SceneMesh),
    Error(String),
}

pub struct SceneEngine {
    tx_cmd: Sender<SceneCommand>,
    rx_result: Receiver<SceneResult>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl SceneEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<SceneCommand>();
        let (tx_result, rx_result) = channel::bounded::<SceneResult>(2);
        let last_error = Arc::new(Mutex::new(None));
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::spawn(move || {
            scene_thread(rx_cmd, tx_result, last_error_clone);
        });

        Self {
            tx_cmd,
            rx_result,
            last_error,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn load(&self, source: SceneSource, resolution: usize) {
        let _ = self.tx_cmd.send(SceneCommand::Load { source, resolution });
    }

    pub fn try_recv_result(&self) -> Option<SceneResult> {
        self.rx_result.try_recv().ok()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(SceneCommand::Stop);
    }
}

impl Drop for SceneEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(SceneCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn scene_thread(
    rx_cmd: Receiver<SceneCommand>,
    tx_result: Sender<SceneResult>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    loop {
        let cmd = match rx_cmd.recv() {
            Ok(c) => c,
            Err(_) => return,
        };

        match cmd {
            SceneCommand::Load { source, resolution } => {
                *last_error.lock() = None;

                let label = source.label();
                match build_scene(&source, resolution) {
                    Ok(scene) => {
                        log::info!(
                            "loaded {label}: {} patches, {} triangles",
                            scene.patch_count,
                            scene.triangle_count()
                        );
                        let _ = tx_result.send(SceneResult::Scene(scene));
                    }
                    Err(e) => {
                        let msg = e.to_string();
                        log::warn!("failed to load {label}: {msg}");
                        *last_error.lock() = Some(msg.clone());
                        let _ = tx_result.send(SceneResult::Error(msg));
                    }
                }
            }
            SceneCommand::Stop => return,
        }
    }
}

fn build_scene(source: &SceneSource, resolution: usize) -> Result<SceneMesh, LoadError> {
    let patches = match source {
        SceneSource::Builtin(i) => patchfile::parse_patches(BUILTIN_SOURCES[*i].data)?,
        SceneSource::File(path) => patchfile::load_patches(path)?,
    };

    let surfaces: Vec<_> = patches
        .iter()
        .map(|grid| sample_surface(grid, resolution))
        .collect();

    Ok(SceneMesh::build(&surfaces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builtin_load_produces_a_scene() {
        let engine = SceneEngine::new();
        engine.load(SceneSource::Builtin(0), 5);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            match engine.try_recv_result() {
                Some(SceneResult::Scene(scene)) => {
                    assert!(scene.patch_count > 0);
                    assert!(scene.triangle_count() > 0);
                    assert!(engine.last_error().is_none());
                    break;
                }
                Some(SceneResult::Error(e)) => panic!("builtin failed to load: {e}"),
                None => {
                    assert!(std::time::Instant::now() < deadline, "engine timed out");
                    thread::sleep(Duration::from_millis(10));
                }
            }
        }
    }

    #[test]
    fn missing_file_reports_error() {
        let engine = SceneEngine::new();
        engine.load(SceneSource::File(PathBuf::from("no/such/patches.txt")), 5);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            match engine.try_recv_result() {
                Some(SceneResult::Error(_)) => {
                    assert!(engine.last_error().is_some());
                    break;
                }
                Some(SceneResult::Scene(_)) => panic!("expected an error result"),
                None => {
                    assert!(std::time::Instant::now() < deadline, "engine timed out");
                    thread::sleep(Duration::from_millis(10));
                }
            }
        }
    }
}
