//! Pitanga theme: white base, purple accent
//!
//! Every screen paints on white with one accent colour. Hover states blend
//! between the two instead of introducing new colours.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The palette. Two real colours plus their text variants.
pub struct PitangaColors;

impl PitangaColors {
    pub const BASE: Color32 = Color32::from_rgb(255, 255, 255);
    /// #570b62
    pub const ACCENT: Color32 = Color32::from_rgb(87, 11, 98);
    pub const TEXT: Color32 = Color32::from_rgb(87, 11, 98);
    pub const TEXT_INVERSE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TITLE_ON_BACKDROP: Color32 = Color32::from_rgb(255, 255, 255);
    /// Report body text, darker than the accent for long reading.
    pub const REPORT_TEXT: Color32 = Color32::from_rgb(40, 40, 40);
}

/// Scale each channel by `factor`, saturating at 255. Alpha is kept.
pub fn brighten(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| ((c as f32 * factor) as u32).min(255) as u8;
    Color32::from_rgba_unmultiplied(scale(color.r()), scale(color.g()), scale(color.b()), color.a())
}

/// Per-channel linear blend, truncated like the integer colours it feeds.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Theme configuration for pitanga screens
pub struct PitangaTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub item_spacing: f32,
}

impl Default for PitangaTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_heading: 26.0,
            font_size_small: 12.0,
            item_spacing: 6.0,
        }
    }
}

impl PitangaTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = PitangaColors::BASE;
        visuals.panel_fill = PitangaColors::BASE;
        visuals.extreme_bg_color = PitangaColors::BASE;
        visuals.override_text_color = Some(PitangaColors::TEXT);
        visuals.window_rounding = Rounding::same(12.0);
        visuals.window_stroke = Stroke::new(2.0, brighten(PitangaColors::ACCENT, 1.4));

        let accent = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::new(1.0, PitangaColors::ACCENT);
            ws.fg_stroke = Stroke::new(1.0, PitangaColors::TEXT);
            ws.rounding = Rounding::same(8.0);
        };
        accent(&mut visuals.widgets.inactive);
        accent(&mut visuals.widgets.hovered);
        accent(&mut visuals.widgets.active);
        visuals.widgets.hovered.weak_bg_fill = brighten(PitangaColors::ACCENT, 2.6);
        visuals.selection.bg_fill = brighten(PitangaColors::ACCENT, 2.2);
        visuals.selection.stroke = Stroke::new(1.0, PitangaColors::TEXT_INVERSE);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);

        ctx.set_style(style);
    }

    /// Proportional bold-ish face used on buttons and titles.
    pub fn button_font(size: f32) -> FontId {
        FontId::new(size, FontFamily::Proportional)
    }

    /// Monospace face used by the report panel.
    pub fn report_font(size: f32) -> FontId {
        FontId::new(size, FontFamily::Monospace)
    }
}
