//! Scrollable, clipped view of report lines.
//!
//! The offset is stored as a non-positive number of points the text is moved
//! up by. It is kept within `[limit, 0]`, where `limit` is minus the overflow
//! of the content below the viewport, so neither end of the report ever
//! scrolls past the card edge.

use crate::summary::SummaryReport;
use egui::{Align2, Event, FontId, Key, MouseWheelUnit, Painter, Pos2, Rect, Rounding, Stroke, Ui, Vec2};
use pitangacore::shade::draw_card;
use pitangacore::theme::{brighten, PitangaColors};

/// Extra vertical space between report lines.
pub const LINE_GAP: f32 = 6.0;
/// Points scrolled per mouse wheel line.
pub const WHEEL_STEP: f32 = 26.0;
/// Points scrolled per arrow key press.
pub const KEY_STEP: f32 = 20.0;
/// A page scroll moves the viewport height divided by this.
const PAGE_DIVISOR: f32 = 1.5;

/// Most negative offset allowed for `lines` lines in a viewport.
pub fn scroll_limit(lines: usize, line_height: f32, viewport_height: f32) -> f32 {
    let content = lines as f32 * line_height;
    -(content - viewport_height).max(0.0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPanel {
    scroll_y: f32,
    last_viewport: Option<Vec2>,
}

impl ReportPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn offset(&self) -> f32 {
        self.scroll_y
    }

    /// Back to the top; called whenever a new report is shown.
    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
    }

    /// Move by `dy` points (positive scrolls toward the top) and clamp.
    pub fn scroll(&mut self, dy: f32, lines: usize, line_height: f32, viewport_height: f32) {
        self.scroll_y += dy;
        self.reclamp(lines, line_height, viewport_height);
    }

    /// Pull the offset back into range, e.g. after the viewport changed.
    pub fn reclamp(&mut self, lines: usize, line_height: f32, viewport_height: f32) {
        let limit = scroll_limit(lines, line_height, viewport_height);
        if !self.scroll_y.is_finite() {
            self.scroll_y = 0.0;
        }
        self.scroll_y = self.scroll_y.clamp(limit, 0.0);
    }

    /// Line height used for `font`.
    pub fn line_height(ui: &Ui, font: &FontId) -> f32 {
        ui.fonts(|f| f.row_height(font)) + LINE_GAP
    }

    /// Paint the card and the visible lines inside `rect`, handling scroll
    /// input while the pointer is over it.
    pub fn show(&mut self, ui: &mut Ui, rect: Rect, padding: f32, font: &FontId, report: &SummaryReport) {
        let painter = ui.painter();
        draw_card(painter, rect);

        let inner = rect.shrink(padding);
        if !inner.is_positive() {
            return;
        }
        let line_height = Self::line_height(ui, font);
        let lines = report.len();
        let viewport = inner.height();

        if self.last_viewport != Some(inner.size()) {
            self.last_viewport = Some(inner.size());
            self.reclamp(lines, line_height, viewport);
        }

        let hovered = ui.rect_contains_pointer(rect);
        let dy = ui.input(|i| scroll_input(&i.events, viewport, hovered));
        if dy != 0.0 {
            self.scroll(dy, lines, line_height, viewport);
        }

        let clipped = painter.with_clip_rect(inner.intersect(painter.clip_rect()));
        self.paint_lines(&clipped, inner, line_height, font, report);
        painter.rect_stroke(
            inner,
            Rounding::same(10.0),
            Stroke::new(2.0, brighten(PitangaColors::TEXT, 1.2)),
        );
    }

    fn paint_lines(
        &self,
        painter: &Painter,
        inner: Rect,
        line_height: f32,
        font: &FontId,
        report: &SummaryReport,
    ) {
        let first = ((-self.scroll_y) / line_height).floor().max(0.0) as usize;
        let visible = (inner.height() / line_height).ceil() as usize + 1;
        for (index, line) in report.lines().iter().enumerate().skip(first).take(visible) {
            let y = inner.min.y + self.scroll_y + index as f32 * line_height;
            painter.text(
                Pos2::new(inner.min.x, y),
                Align2::LEFT_TOP,
                line,
                font.clone(),
                PitangaColors::REPORT_TEXT,
            );
        }
    }
}

/// Scroll delta requested by this frame's events. Wheel input only counts
/// while the pointer is over the panel; keys always do.
fn scroll_input(events: &[Event], viewport_height: f32, hovered: bool) -> f32 {
    let mut dy = 0.0;
    for event in events {
        match event {
            Event::MouseWheel { unit, delta, .. } if hovered => {
                dy += match unit {
                    MouseWheelUnit::Point => delta.y,
                    MouseWheelUnit::Line => delta.y * WHEEL_STEP,
                    MouseWheelUnit::Page => delta.y * viewport_height,
                };
            }
            Event::Key {
                key, pressed: true, ..
            } => {
                dy += match key {
                    Key::ArrowUp | Key::K => KEY_STEP,
                    Key::ArrowDown | Key::J => -KEY_STEP,
                    Key::PageUp => viewport_height / PAGE_DIVISOR,
                    Key::PageDown => -viewport_height / PAGE_DIVISOR,
                    _ => 0.0,
                };
            }
            _ => {}
        }
    }
    dy
}
