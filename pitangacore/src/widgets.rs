//! Custom widgets: rounded accent buttons with eased hover

use crate::animation::HoverAnimation;
use crate::shade::draw_shadow;
use crate::theme::{brighten, lerp_color, PitangaColors};
use egui::{Align2, FontId, Rect, Rounding, Sense, Stroke, Ui, Vec2};

/// Corner radius of every button.
pub const BUTTON_RADIUS: f32 = 18.0;

/// Pressed buttons shrink to this fraction of their rect.
const PRESSED_SCALE: f32 = 0.98;

/// A button that owns its place on screen and the action it stands for.
///
/// The screen lays buttons out by writing `rect`, then calls [`show`] every
/// frame. Clicking yields a clone of `action`; the screen never registers
/// callbacks.
///
/// [`show`]: AnimatedButton::show
#[derive(Debug, Clone)]
pub struct AnimatedButton<A> {
    pub label: String,
    pub action: A,
    pub rect: Rect,
    hover: HoverAnimation,
}

impl<A: Clone> AnimatedButton<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
            rect: Rect::NOTHING,
            hover: HoverAnimation::new(),
        }
    }

    /// Whether the hover colour is still easing toward its target.
    pub fn is_animating(&self) -> bool {
        self.hover.is_animating()
    }

    /// Paint the button at `self.rect` and return its action when clicked.
    pub fn show(&mut self, ui: &mut Ui, font: &FontId) -> Option<A> {
        if !self.rect.is_positive() {
            return None;
        }
        let id = ui.id().with(("animated_button", self.label.as_str()));
        let response = ui.interact(self.rect, id, Sense::click());

        let t = self.hover.step(response.hovered());
        let fill = lerp_color(PitangaColors::BASE, PitangaColors::ACCENT, t);
        let border = lerp_color(PitangaColors::ACCENT, brighten(PitangaColors::ACCENT, 1.4), t);
        let text = lerp_color(PitangaColors::TEXT, PitangaColors::TEXT_INVERSE, t);

        let pressed = response.is_pointer_button_down_on();
        let rect = if pressed { pressed_rect(self.rect) } else { self.rect };

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            draw_shadow(painter, rect, BUTTON_RADIUS, Vec2::new(0.0, 8.0), 70);
            painter.rect_filled(rect, Rounding::same(BUTTON_RADIUS), fill);
            painter.rect_stroke(rect, Rounding::same(BUTTON_RADIUS), Stroke::new(2.0, border));
            painter.text(rect.center(), Align2::CENTER_CENTER, &self.label, font.clone(), text);
        }

        if response.clicked() {
            Some(self.action.clone())
        } else {
            None
        }
    }
}

/// The rect a pressed button is drawn in: same centre, 98% of the size.
pub fn pressed_rect(rect: Rect) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * PRESSED_SCALE)
}

/// Status line: small accent text, no frame.
pub fn status_bar(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).small().color(PitangaColors::TEXT));
}
