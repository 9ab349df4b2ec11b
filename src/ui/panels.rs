use egui::{Color32, Context, RichText, ScrollArea, Ui};

use crate::patchfile::BUILTIN_SOURCES;
use crate::renderer::CameraMode;
use crate::ui::state::UiState;
use crate::ui::theme::*;

/// Panel interactions for one frame. Each selectable source reports its
/// own index here; nothing is captured in callbacks.
#[derive(Default)]
pub struct UiActions {
    pub load_builtin: Option<usize>,
    pub open_file_dialog: bool,
    pub reload: bool,
}

pub fn draw_side_panel(
    ctx: &Context,
    state: &mut UiState,
    fps: f32,
    last_error: &Option<String>,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(280.0)
        .max_width(360.0)
        .default_width(300.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("PATCHVIEW").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Bezier surface viewer")
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "SOURCES");
                for (i, source) in BUILTIN_SOURCES.iter().enumerate() {
                    let selected = state.selected_source == Some(i);
                    let button = egui::Button::new(
                        RichText::new(source.name)
                            .color(if selected { Color32::BLACK } else { TEXT_PRIMARY }),
                    )
                    .fill(if selected { ACCENT_TEAL } else { BG_WIDGET })
                    .min_size(egui::vec2(ui.available_width(), 28.0));

                    if ui.add(button).on_hover_text(source.description).clicked() {
                        actions.load_builtin = Some(i);
                    }
                }
                ui.add_space(8.0);

                if ui
                    .add(
                        egui::Button::new("Open file...")
                            .min_size(egui::vec2(ui.available_width(), 28.0)),
                    )
                    .clicked()
                {
                    actions.open_file_dialog = true;
                }

                if let Some(path) = &state.custom_file {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(path.as_str())
                            .color(TEXT_MUTED)
                            .size(10.0)
                            .italics(),
                    );
                }
                ui.add_space(16.0);

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "SURFACE");
                ui.horizontal(|ui| {
                    ui.label("Resolution:");
                    if ui
                        .add(egui::Slider::new(&mut state.resolution, 2..=64))
                        .changed()
                    {
                        actions.reload = true;
                    }
                });
                ui.label(
                    RichText::new("Samples per patch axis")
                        .color(TEXT_MUTED)
                        .size(10.0),
                );
                ui.add_space(16.0);

                section_header(ui, "VIEW");
                ui.horizontal(|ui| {
                    ui.label("Camera:");
                    if ui
                        .selectable_label(state.camera_mode == CameraMode::Orbital, "Orbital")
                        .clicked()
                    {
                        state.camera_mode = CameraMode::Orbital;
                    }
                    if ui
                        .selectable_label(state.camera_mode == CameraMode::Free, "Free")
                        .clicked()
                    {
                        state.camera_mode = CameraMode::Free;
                    }
                });
                ui.checkbox(&mut state.show_bounds, "Show bounds cube");
                ui.add_space(16.0);

                section_header(ui, "PERFORMANCE");
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.vsync_enabled, "VSync");
                    ui.checkbox(&mut state.show_stats, "Stats");
                });
                ui.add_space(16.0);

                if let Some(err) = last_error {
                    error_frame(ui, err);
                    ui.add_space(16.0);
                }

                if state.show_stats {
                    ui.separator();
                    ui.add_space(12.0);
                    stats_panel(ui, state, fps);
                }
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn error_frame(ui: &mut Ui, err: &str) {
    egui::Frame::default()
        .fill(Color32::from_rgb(40, 15, 15))
        .stroke(egui::Stroke::new(1.0, ACCENT_RED))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(err).color(ACCENT_RED).size(11.0));
        });
}

fn stats_panel(ui: &mut Ui, state: &UiState, fps: f32) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("FPS").color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{fps:.0}")).color(ACCENT_TEAL));
                    ui.end_row();

                    ui.label(RichText::new("Patches").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{}", state.patch_count)).color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Triangles").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{}", state.triangle_count)).color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Resolution").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{}", state.resolution)).color(TEXT_PRIMARY),
                    );
                    ui.end_row();
                });
        });
}

pub fn draw_help_overlay(ctx: &Context, pos: [f32; 3], mode: CameraMode) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    let controls = match mode {
                        CameraMode::Free => "WASD - Move | RMB+Drag - Look | Scroll - Speed",
                        CameraMode::Orbital => "RMB+Drag - Orbit | Scroll - Zoom",
                    };
                    ui.label(RichText::new(controls).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!(
                            "Pos: ({:.1}, {:.1}, {:.1})",
                            pos[0], pos[1], pos[2]
                        ))
                        .color(TEXT_MUTED),
                    );
                });
        });
}
