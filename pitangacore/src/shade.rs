//! Shadow, vignette and translucent card painting.
//!
//! Everything here is built from plain rectangles so it behaves the same on
//! any backend: shadows are a single large translucent rect, the vignette is a
//! stack of inset outlines, and the card gradient is painted one row at a time.

use crate::animation::lerp;
use crate::theme::{brighten, PitangaColors};
use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke, Vec2};

/// How far a shadow extends past the rect it belongs to, on every side.
const SHADOW_SPREAD: f32 = 20.0;

/// Number of inset outlines making up the vignette.
const VIGNETTE_STEPS: usize = 40;

/// Card fill alpha at the top and bottom rows.
const CARD_ALPHA_TOP: f32 = 90.0;
const CARD_ALPHA_BOTTOM: f32 = 140.0;

/// Corner radius of report and menu cards.
pub const CARD_RADIUS: f32 = 24.0;

/// Draw a soft drop shadow behind `rect`.
/// `radius` is the rect's own corner radius; the shadow is rounder by 8.
pub fn draw_shadow(painter: &Painter, rect: Rect, radius: f32, offset: Vec2, alpha: u8) {
    let shadow = rect.expand(SHADOW_SPREAD).translate(offset);
    painter.rect_filled(
        shadow,
        Rounding::same(radius + 8.0),
        Color32::from_black_alpha(alpha),
    );
}

/// Alpha of the `step`-th vignette outline (0 = outermost).
pub fn vignette_alpha(step: usize) -> u8 {
    let alpha = (80.0 * (step as f32 / VIGNETTE_STEPS as f32)) as u32;
    (alpha / 6) as u8
}

/// Darken the screen edges with concentric rounded outlines.
pub fn draw_vignette(painter: &Painter, screen: Rect) {
    let rounding = (screen.width().min(screen.height()) * 0.02).max(6.0);
    for step in 0..VIGNETTE_STEPS {
        let inset = step as f32;
        let outline = screen.shrink(inset);
        if outline.width() <= 0.0 || outline.height() <= 0.0 {
            break;
        }
        painter.rect_stroke(
            outline,
            Rounding::same(rounding),
            Stroke::new(1.0, Color32::from_black_alpha(vignette_alpha(step))),
        );
    }
}

/// Horizontal inset of row `row` (0-based) in a box of `height` rows whose
/// corners are rounded with `radius`. Rows away from the corners get 0.
pub fn corner_inset(radius: f32, row: f32, height: f32) -> f32 {
    let radius = radius.min(height / 2.0).max(0.0);
    let from_edge = if row < radius {
        radius - row
    } else if row > height - radius {
        row - (height - radius)
    } else {
        return 0.0;
    };
    radius - (radius * radius - from_edge * from_edge).max(0.0).sqrt()
}

/// Translucent white card with a vertical alpha gradient, shadow and border.
pub fn draw_card(painter: &Painter, rect: Rect) {
    draw_shadow(painter, rect, CARD_RADIUS + 4.0, Vec2::new(0.0, 10.0), 90);

    let rows = rect.height().max(1.0) as usize;
    let last = (rows.saturating_sub(1)).max(1) as f32;
    for row in 0..rows {
        let y = row as f32;
        let inset = corner_inset(CARD_RADIUS, y + 0.5, rect.height());
        let alpha = lerp(CARD_ALPHA_TOP, CARD_ALPHA_BOTTOM, y / last) as u8;
        let strip = Rect::from_min_max(
            Pos2::new(rect.min.x + inset, rect.min.y + y),
            Pos2::new(rect.max.x - inset, rect.min.y + y + 1.0),
        );
        painter.rect_filled(strip, 0.0, Color32::from_white_alpha(alpha));
    }

    painter.rect_stroke(
        rect,
        Rounding::same(CARD_RADIUS),
        Stroke::new(2.0, brighten(PitangaColors::ACCENT, 1.4)),
    );
}
