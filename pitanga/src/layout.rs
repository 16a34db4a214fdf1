//! Window-size driven geometry for both screens.
//!
//! Everything is recomputed from the current screen rect every frame; nothing
//! here keeps state.

use egui::{pos2, vec2, Pos2, Rect};

/// Title font size, at least `minimum`.
fn title_font_size(height: f32, minimum: f32) -> f32 {
    (height * 0.05).max(minimum)
}

/// Menu screen: a centred card holding a column of buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub title_pos: Pos2,
    pub title_size: f32,
    pub card: Rect,
    pub buttons: Vec<Rect>,
    pub button_font_size: f32,
}

impl MenuLayout {
    pub fn compute(screen: Rect, button_count: usize) -> Self {
        let w = screen.width();
        let h = screen.height();

        let card_w = (w * 0.78).clamp(360.0, 560.0);
        let button_w = card_w * 0.88;
        let button_h = (h * 0.09).max(52.0);
        let spacing = (h * 0.03).max(14.0);
        let padding = (h * 0.04).max(24.0);
        let title_size = title_font_size(h, 22.0);

        let n = button_count as f32;
        let card_h = padding * 2.0 + n * button_h + (n - 1.0).max(0.0) * spacing;
        let card = Rect::from_center_size(screen.center() + vec2(0.0, title_size * 0.5), vec2(card_w, card_h));

        let title_pos = pos2(screen.center().x, card.min.y - title_size * 1.2);

        let buttons = (0..button_count)
            .map(|i| {
                let top = card.min.y + padding + i as f32 * (button_h + spacing);
                Rect::from_min_size(pos2(card.center().x - button_w / 2.0, top), vec2(button_w, button_h))
            })
            .collect();

        Self {
            title_pos,
            title_size,
            card,
            buttons,
            button_font_size: (button_h * 0.44).max(18.0),
        }
    }
}

/// Button grid columns for a window width.
pub fn button_columns(width: f32) -> usize {
    if width >= 980.0 {
        3
    } else if width >= 680.0 {
        2
    } else {
        1
    }
}

/// Spreadsheet screen: title, button grid, file legend, report card.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub title_pos: Pos2,
    pub title_size: f32,
    pub buttons: Vec<Rect>,
    pub button_font_size: f32,
    /// Area for at most [`LEGEND_LINES`] lines of legend text, as wide as the
    /// button grid.
    pub legend: Rect,
    pub report: Rect,
    pub report_padding: f32,
    pub report_font_size: f32,
}

pub const LEGEND_LINES: usize = 2;
pub const LEGEND_MIN_WIDTH: f32 = 160.0;
pub const REPORT_MIN_HEIGHT: f32 = 140.0;

impl SheetLayout {
    /// `legend_line_height` is the row height of the legend font.
    pub fn compute(screen: Rect, button_count: usize, legend_line_height: f32) -> Self {
        let w = screen.width();
        let h = screen.height();
        let short_side = w.min(h);

        let margin = (short_side * 0.04).max(16.0);
        let title_size = title_font_size(h, 20.0);
        let title_pos = pos2(screen.center().x, screen.min.y + margin);

        let cols = button_columns(w).min(button_count.max(1));
        let rows = button_count.div_ceil(cols);
        let avail = w - margin * 2.0;
        let gap = margin * 0.5;
        let button_h = (h * 0.085).max(48.0);
        let button_w = ((avail - gap * (cols as f32 - 1.0)) / cols as f32).clamp(120.0, 280.0);

        let grid_w = cols as f32 * button_w + (cols as f32 - 1.0) * gap;
        let grid_left = screen.center().x - grid_w / 2.0;
        let grid_top = title_pos.y + title_size * 1.4;

        let buttons = (0..button_count)
            .map(|i| {
                let (row, col) = (i / cols, i % cols);
                Rect::from_min_size(
                    pos2(
                        grid_left + col as f32 * (button_w + gap),
                        grid_top + row as f32 * (button_h + gap),
                    ),
                    vec2(button_w, button_h),
                )
            })
            .collect();
        let grid_bottom = grid_top + rows as f32 * button_h + (rows as f32 - 1.0).max(0.0) * gap;

        // legend spans the button grid
        let legend = Rect::from_min_size(
            pos2(grid_left, grid_bottom + gap),
            vec2(grid_w.max(LEGEND_MIN_WIDTH), legend_line_height * LEGEND_LINES as f32),
        );

        let report_top = legend.max.y + gap;
        let report_h = (screen.max.y - margin - report_top).max(REPORT_MIN_HEIGHT);
        let report = Rect::from_min_size(pos2(screen.min.x + margin, report_top), vec2(avail, report_h));

        Self {
            title_pos,
            title_size,
            buttons,
            button_font_size: (button_h * 0.42).max(16.0),
            legend,
            report,
            report_padding: (short_side * 0.02).max(14.0),
            report_font_size: (h * 0.022).max(14.0),
        }
    }
}
