use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const BG_PANEL: Color32 = Color32::from_rgb(10, 10, 13);
pub const BG_WIDGET: Color32 = Color32::from_rgb(22, 22, 28);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(34, 34, 44);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(46, 46, 60);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(182, 182, 186);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(115, 115, 122);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(228, 228, 233);

pub const ACCENT_TEAL: Color32 = Color32::from_rgb(54, 158, 148);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(92, 118, 212);
pub const ACCENT_RED: Color32 = Color32::from_rgb(188, 54, 54);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgba_premultiplied(60, 64, 96, 70);

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    style.visuals = Visuals {
        dark_mode: true,
        override_text_color: Some(TEXT_PRIMARY),

        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_WIDGET,
                weak_bg_fill: BG_PANEL,
                bg_stroke: Stroke::new(1.0, BORDER_SUBTLE),
                rounding: Rounding::same(4.0),
                fg_stroke: Stroke::new(1.0, TEXT_MUTED),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_WIDGET,
                weak_bg_fill: BG_WIDGET,
                bg_stroke: Stroke::new(1.0, BORDER_SUBTLE),
                rounding: Rounding::same(4.0),
                fg_stroke: Stroke::new(1.0, TEXT_PRIMARY),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_WIDGET_HOVER,
                weak_bg_fill: BG_WIDGET_HOVER,
                bg_stroke: Stroke::new(1.0, ACCENT_BLUE),
                rounding: Rounding::same(4.0),
                fg_stroke: Stroke::new(1.0, TEXT_BRIGHT),
                expansion: 1.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_WIDGET_ACTIVE,
                weak_bg_fill: BG_WIDGET_ACTIVE,
                bg_stroke: Stroke::new(2.0, ACCENT_TEAL),
                rounding: Rounding::same(4.0),
                fg_stroke: Stroke::new(1.0, TEXT_BRIGHT),
                expansion: 1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_WIDGET_ACTIVE,
                weak_bg_fill: BG_WIDGET_ACTIVE,
                bg_stroke: Stroke::new(1.0, ACCENT_BLUE),
                rounding: Rounding::same(4.0),
                fg_stroke: Stroke::new(1.0, TEXT_BRIGHT),
                expansion: 0.0,
            },
        },

        selection: egui::style::Selection {
            bg_fill: ACCENT_TEAL.gamma_multiply(0.4),
            stroke: Stroke::new(1.0, ACCENT_TEAL),
        },

        hyperlink_color: ACCENT_BLUE,
        faint_bg_color: BG_PANEL,
        extreme_bg_color: Color32::from_rgb(4, 4, 5),
        warn_fg_color: ACCENT_TEAL,
        error_fg_color: ACCENT_RED,

        window_rounding: Rounding::same(6.0),
        window_fill: BG_PANEL,
        window_stroke: Stroke::new(1.0, BORDER_SUBTLE),

        panel_fill: BG_PANEL,

        slider_trailing_fill: true,
        ..Visuals::dark()
    };

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 180.0;

    style.text_styles = [
        (
            TextStyle::Small,
            FontId::new(11.0, FontFamily::Proportional),
        ),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Heading,
            FontId::new(18.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        ),
    ]
    .into();

    ctx.set_style(style);
}
