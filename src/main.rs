use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use glam::Vec2;

mod bezier;
mod patchfile;
mod renderer;
mod ui;

use bezier::{SceneEngine, SceneResult, SceneSource};
use renderer::{Camera, GpuState};
use ui::{UiActions, UiState, apply_theme, draw_help_overlay, draw_side_panel};

struct InputState {
    forward: f32,
    right: f32,
    up: f32,
    mouse_captured: bool,
    mouse_delta: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            forward: 0.0,
            right: 0.0,
            up: 0.0,
            mouse_captured: false,
            mouse_delta: Vec2::ZERO,
        }
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_ctx: egui::Context,

    camera: Camera,
    scene_engine: SceneEngine,
    ui_state: UiState,
    input: InputState,

    current_source: Option<SceneSource>,
    scene_error: Option<String>,

    last_frame: Instant,
    frame_count: u32,
    fps_timer: Instant,
    fps: f32,

    last_vsync_state: bool,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            egui_state: None,
            egui_renderer: None,
            egui_ctx: egui::Context::default(),

            camera: Camera::orbiting(),
            scene_engine: SceneEngine::new(),
            ui_state: UiState::default(),
            input: InputState::default(),

            current_source: None,
            scene_error: None,

            last_frame: Instant::now(),
            frame_count: 0,
            fps_timer: Instant::now(),
            fps: 0.0,

            last_vsync_state: true,
        }
    }

    fn init_gpu(&mut self, window: Arc<Window>) {
        let gpu = pollster::block_on(GpuState::new(window.clone()));

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            self.egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );

        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);

        apply_theme(&self.egui_ctx);

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);
    }

    fn submit_load(&mut self, source: SceneSource) {
        self.scene_error = None;
        self.scene_engine
            .load(source.clone(), self.ui_state.resolution as usize);
        self.current_source = Some(source);
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_count += 1;
        if self.fps_timer.elapsed().as_secs_f32() >= 1.0 {
            self.fps = self.frame_count as f32 / self.fps_timer.elapsed().as_secs_f32();
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }

        self.camera.set_mode(self.ui_state.camera_mode);
        self.camera
            .process_keyboard(self.input.forward, self.input.right, self.input.up, dt);

        if self.input.mouse_captured {
            self.camera.process_mouse_movement(self.input.mouse_delta);
        }
        self.input.mouse_delta = Vec2::ZERO;

        while let Some(result) = self.scene_engine.try_recv_result() {
            match result {
                SceneResult::Scene(scene) => {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.scene_buffers.upload_scene(&gpu.queue, &scene);
                        self.ui_state.patch_count = scene.patch_count;
                        self.ui_state.triangle_count = scene.triangle_count();
                        self.scene_error = None;
                    }
                }
                SceneResult::Error(e) => {
                    self.scene_error = Some(e);
                }
            }
        }
    }

    fn render(&mut self) {
        let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) else {
            return;
        };

        let raw_input = egui_state.take_egui_input(window);

        let last_error = self
            .scene_error
            .clone()
            .or_else(|| self.scene_engine.last_error());

        let camera_pos = self.camera.position.to_array();
        let camera_mode = self.ui_state.camera_mode;
        let fps = self.fps;

        let mut ui_actions = UiActions::default();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            ui_actions = draw_side_panel(ctx, &mut self.ui_state, fps, &last_error);
            draw_help_overlay(ctx, camera_pos, camera_mode);
        });

        self.handle_ui_actions(ui_actions);

        let Some(gpu) = &mut self.gpu else { return };
        let Some(window) = &self.window else { return };
        let Some(egui_state) = &mut self.egui_state else {
            return;
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return;
        };

        egui_state.handle_platform_output(window, full_output.platform_output);

        if self.ui_state.vsync_enabled != self.last_vsync_state {
            gpu.set_vsync(self.ui_state.vsync_enabled);
            self.last_vsync_state = self.ui_state.vsync_enabled;
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.resize(gpu.size);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                panic!("Out of GPU memory");
            }
            Err(wgpu::SurfaceError::Timeout) => {
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.update_camera(&self.camera);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, delta) in full_output.textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        if self.ui_state.show_bounds {
            gpu.render_bounds(&view, &mut encoder, true);
            gpu.render_scene(&view, &mut encoder, false);
        } else {
            gpu.render_scene(&view, &mut encoder, true);
        }

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        window.request_redraw();
    }

    fn handle_ui_actions(&mut self, actions: UiActions) {
        if let Some(i) = actions.load_builtin {
            self.ui_state.selected_source = Some(i);
            self.ui_state.custom_file = None;
            self.submit_load(SceneSource::Builtin(i));
        }

        if actions.open_file_dialog {
            let picked = rfd::FileDialog::new()
                .add_filter("Text files", &["txt"])
                .pick_file();

            // a cancelled dialog is a no-op
            if let Some(path) = picked {
                self.ui_state.selected_source = None;
                self.ui_state.custom_file = Some(path.display().to_string());
                self.submit_load(SceneSource::File(path));
            }
        }

        if actions.reload {
            if let Some(source) = self.current_source.clone() {
                self.submit_load(source);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let value = if pressed { 1.0 } else { 0.0 };

        match key {
            KeyCode::KeyW | KeyCode::KeyZ => self.input.forward = value,
            KeyCode::KeyS => self.input.forward = -value,
            KeyCode::KeyA | KeyCode::KeyQ => self.input.right = -value,
            KeyCode::KeyD => self.input.right = value,
            KeyCode::Space => self.input.up = value,
            KeyCode::ShiftLeft | KeyCode::ControlLeft => self.input.up = -value,
            KeyCode::Escape if pressed => {
                self.input.mouse_captured = false;
                if let Some(window) = &self.window {
                    let _ = window.set_cursor_grab(winit::window::CursorGrabMode::None);
                    window.set_cursor_visible(true);
                }
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Bezier Patch Viewer")
            .with_inner_size(PhysicalSize::new(1280, 800));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.init_gpu(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(egui_state) = &mut self.egui_state {
            if let Some(window) = &self.window {
                let response = egui_state.on_window_event(window, &event);
                if response.consumed {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.scene_engine.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                    self.camera
                        .set_aspect(size.width as f32, size.height as f32);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state,
                ..
            } => {
                self.input.mouse_captured = state == ElementState::Pressed;

                if let Some(window) = &self.window {
                    if self.input.mouse_captured {
                        let _ = window.set_cursor_grab(winit::window::CursorGrabMode::Confined);
                        window.set_cursor_visible(false);
                    } else {
                        let _ = window.set_cursor_grab(winit::window::CursorGrabMode::None);
                        window.set_cursor_visible(true);
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.camera.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => {
                self.update();
                self.render();
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: winit::event::DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.input.mouse_captured {
                self.input.mouse_delta.x += delta.0 as f32;
                self.input.mouse_delta.y += delta.1 as f32;
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).unwrap();
}
