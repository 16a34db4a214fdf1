//! Analysis center menu

use crate::layout::MenuLayout;
use crate::nav::{Action, ScreenId};
use egui::{Align2, TextureHandle, Ui};
use pitangacore::backdrop;
use pitangacore::shade::{draw_card, draw_vignette};
use pitangacore::theme::PitangaColors;
use pitangacore::widgets::AnimatedButton;
use pitangacore::PitangaTheme;

pub const MENU_TITLE: &str = "analysis center";

pub struct MenuScreen {
    buttons: Vec<AnimatedButton<Action>>,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            buttons: vec![
                AnimatedButton::new("spreadsheet analysis", Action::Open(ScreenId::Sheet)),
                AnimatedButton::new("document analysis", Action::Notify("document analysis")),
                AnimatedButton::new("image analysis", Action::Notify("image analysis")),
                AnimatedButton::new("data analysis", Action::Notify("data analysis")),
            ],
        }
    }

    pub fn is_animating(&self) -> bool {
        self.buttons.iter().any(AnimatedButton::is_animating)
    }

    pub fn show(&mut self, ui: &mut Ui, backdrop_texture: Option<&TextureHandle>) -> Option<Action> {
        let screen = ui.max_rect();
        let layout = MenuLayout::compute(screen, self.buttons.len());

        {
            let painter = ui.painter();
            backdrop::paint(painter, screen, backdrop_texture);
            draw_vignette(painter, screen);
            draw_card(painter, layout.card);

            let title_color = if backdrop_texture.is_some() {
                PitangaColors::TITLE_ON_BACKDROP
            } else {
                PitangaColors::TEXT
            };
            painter.text(
                layout.title_pos,
                Align2::CENTER_CENTER,
                MENU_TITLE,
                PitangaTheme::button_font(layout.title_size),
                title_color,
            );
        }

        let font = PitangaTheme::button_font(layout.button_font_size);
        let mut clicked = None;
        for (button, rect) in self.buttons.iter_mut().zip(layout.buttons) {
            button.rect = rect;
            if let Some(action) = button.show(ui, &font) {
                clicked = Some(action);
            }
        }
        clicked
    }
}
