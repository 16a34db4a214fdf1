//! Pitanga application: screen stack, action dispatch, repaint control

use crate::menu::MenuScreen;
use crate::nav::{Action, NavStack, ScreenId};
use crate::settings::Settings;
use crate::sheet_screen::SheetScreen;
use egui::{Context, TextureHandle};
use pitangacore::backdrop;
use pitangacore::repaint::RepaintController;
use pitangacore::widgets::status_bar;
use std::path::PathBuf;

/// State shared by every screen.
pub struct AppContext {
    pub settings: Settings,
    settings_path: PathBuf,
    /// Message shown in the status line.
    pub status: String,
}

impl AppContext {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            settings,
            settings_path,
            status: String::new(),
        }
    }

    pub fn save_settings(&self) {
        self.settings.save_to(&self.settings_path);
    }
}

pub enum Screen {
    Menu(MenuScreen),
    Sheet(SheetScreen),
}

impl Screen {
    fn open(id: ScreenId) -> Self {
        match id {
            ScreenId::Sheet => Screen::Sheet(SheetScreen::new()),
        }
    }

    fn is_animating(&self) -> bool {
        match self {
            Screen::Menu(menu) => menu.is_animating(),
            Screen::Sheet(sheet) => sheet.is_animating(),
        }
    }
}

pub struct PitangaApp {
    nav: NavStack<Screen>,
    context: AppContext,
    backdrop: Option<TextureHandle>,
    backdrop_loaded: bool,
    repaint: RepaintController,
}

impl PitangaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self::with_context(AppContext::new(settings, Settings::config_path()))
    }

    fn with_context(context: AppContext) -> Self {
        Self {
            nav: NavStack::new(Screen::Menu(MenuScreen::new())),
            context,
            backdrop: None,
            backdrop_loaded: false,
            repaint: RepaintController::new(),
        }
    }

    /// Start on the spreadsheet screen with `path` already chosen.
    pub fn open_file(&mut self, path: PathBuf) {
        let mut sheet = SheetScreen::new();
        sheet.select_file(path, &mut self.context);
        self.nav.push(Screen::Sheet(sheet));
    }

    /// Route an action: navigation goes to the stack, the rest to the
    /// current screen.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Open(id) => {
                log::info!("opening {:?} screen", id);
                self.context.status.clear();
                self.nav.push(Screen::open(id));
            }
            Action::Back => {
                if self.nav.pop().is_some() {
                    log::info!("back to previous screen (depth {})", self.nav.depth());
                }
                self.context.status.clear();
            }
            Action::Notify(name) => {
                log::info!("{} started", name);
                self.context.status = format!("{} started!", name);
            }
            Action::ChooseFile | Action::Analyse => {
                if let Screen::Sheet(sheet) = self.nav.current_mut() {
                    sheet.handle(action, &mut self.context);
                }
            }
        }
    }

    fn ensure_backdrop(&mut self, ctx: &Context) {
        if !self.backdrop_loaded {
            self.backdrop_loaded = true;
            self.backdrop = backdrop::load_texture(ctx, self.context.settings.background_image.as_deref());
        }
    }
}

impl eframe::App for PitangaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.ensure_backdrop(ctx);

        if !self.context.status.is_empty() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| status_bar(ui, &self.context.status));
        }

        let mut clicked = None;
        egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
            clicked = match self.nav.current_mut() {
                Screen::Menu(menu) => menu.show(ui, self.backdrop.as_ref()),
                Screen::Sheet(sheet) => sheet.show(ui, &mut self.context),
            };
        });

        if let Some(action) = clicked {
            self.dispatch(action);
        }

        if self.nav.current().is_animating() {
            self.repaint.mark_animating();
        }
        self.repaint.end_frame(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (PitangaApp, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let context = AppContext::new(Settings::default(), dir.path().join("settings.json"));
        (PitangaApp::with_context(context), dir)
    }

    #[test]
    fn test_open_and_back() {
        let (mut app, _dir) = app();
        app.dispatch(Action::Open(ScreenId::Sheet));
        assert_eq!(app.nav.depth(), 2);
        assert!(matches!(app.nav.current(), Screen::Sheet(_)));
        app.dispatch(Action::Back);
        assert!(matches!(app.nav.current(), Screen::Menu(_)));
        app.dispatch(Action::Back);
        assert_eq!(app.nav.depth(), 1);
        assert!(matches!(app.nav.current(), Screen::Menu(_)));
    }

    #[test]
    fn test_notify_sets_status() {
        let (mut app, _dir) = app();
        app.dispatch(Action::Notify("image analysis"));
        assert_eq!(app.context.status, "image analysis started!");
        app.dispatch(Action::Open(ScreenId::Sheet));
        assert!(app.context.status.is_empty());
    }

    #[test]
    fn test_screen_actions_ignored_on_menu() {
        let (mut app, _dir) = app();
        app.dispatch(Action::Analyse);
        app.dispatch(Action::ChooseFile);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_open_file_starts_on_sheet() {
        let (mut app, dir) = app();
        let path = dir.path().join("vendas.csv");
        std::fs::write(&path, "a\n1\n").unwrap();
        app.open_file(path.clone());
        assert_eq!(app.nav.depth(), 2);
        assert_eq!(app.context.settings.recent.files, vec![path]);
        assert!(dir.path().join("settings.json").is_file());
    }
}
