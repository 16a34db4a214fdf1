//! Spreadsheet analysis screen
//!
//! Choose a file, analyse it, read the report. The file is picked in an
//! in-app browser window filtered to the formats the loader understands.

use crate::analysis::{self, picker_error_report, selection_report};
use crate::app::AppContext;
use crate::layout::{SheetLayout, LEGEND_LINES};
use crate::nav::Action;
use crate::report::ReportPanel;
use crate::summary::SummaryReport;
use egui::{Align2, Context, FontId, Pos2, Ui};
use pitangacore::shade::draw_vignette;
use pitangacore::storage::FileBrowser;
use pitangacore::text::wrap_clamped;
use pitangacore::theme::PitangaColors;
use pitangacore::widgets::AnimatedButton;
use pitangacore::PitangaTheme;
use std::path::PathBuf;

pub const SHEET_TITLE: &str = "spreadsheet analysis";

/// Extensions shown by the file browser, without the dot.
const BROWSER_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

/// Spacing between legend lines.
const LEGEND_GAP: f32 = 2.0;

enum BrowserOutcome {
    Pending,
    Cancelled,
    Picked(PathBuf),
}

pub struct SheetScreen {
    buttons: Vec<AnimatedButton<Action>>,
    file: Option<PathBuf>,
    report: SummaryReport,
    panel: ReportPanel,
    browser: Option<FileBrowser>,
}

impl Default for SheetScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetScreen {
    pub fn new() -> Self {
        Self {
            buttons: vec![
                AnimatedButton::new("choose spreadsheet", Action::ChooseFile),
                AnimatedButton::new("analyse", Action::Analyse),
                AnimatedButton::new("← back", Action::Back),
            ],
            file: None,
            report: SummaryReport::default(),
            panel: ReportPanel::new(),
            browser: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.buttons.iter().any(AnimatedButton::is_animating)
    }

    pub fn handle(&mut self, action: Action, ctx: &mut AppContext) {
        match action {
            Action::ChooseFile => self.choose_file(ctx),
            Action::Analyse => self.analyse(ctx),
            _ => {}
        }
    }

    /// Open the browser at the last used folder.
    pub fn choose_file(&mut self, ctx: &mut AppContext) {
        let start = ctx.settings.browse_dir();
        match FileBrowser::open(start.clone(), BROWSER_EXTENSIONS) {
            Ok(browser) => self.browser = Some(browser),
            Err(e) => {
                log::warn!("could not list {:?}: {}", start, e);
                self.set_report(picker_error_report(&e));
            }
        }
    }

    pub fn select_file(&mut self, path: PathBuf, ctx: &mut AppContext) {
        log::info!("selected {:?}", path);
        self.set_report(selection_report(&path));
        ctx.settings.recent.add(path.clone());
        ctx.save_settings();
        self.file = Some(path);
    }

    pub fn analyse(&mut self, ctx: &AppContext) {
        let report = analysis::analyse(self.file.as_deref(), &ctx.settings.load_options());
        self.set_report(report);
    }

    fn set_report(&mut self, report: SummaryReport) {
        self.report = report;
        self.panel.reset();
    }

    pub fn legend_text(&self) -> String {
        match &self.file {
            Some(path) => format!(
                "file: {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string())
            ),
            None => "file: none selected".to_string(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, ctx: &mut AppContext) -> Option<Action> {
        let screen = ui.max_rect();
        let legend_font = PitangaTheme::report_font((screen.height() * 0.022).max(14.0));
        let legend_row = ui.fonts(|f| f.row_height(&legend_font)) + LEGEND_GAP;
        let layout = SheetLayout::compute(screen, self.buttons.len(), legend_row);

        {
            let painter = ui.painter();
            painter.rect_filled(screen, 0.0, PitangaColors::BASE);
            draw_vignette(painter, screen);
            painter.text(
                layout.title_pos,
                Align2::CENTER_TOP,
                SHEET_TITLE,
                PitangaTheme::button_font(layout.title_size),
                PitangaColors::TEXT,
            );
        }

        let font = PitangaTheme::button_font(layout.button_font_size);
        let mut clicked = None;
        for (button, rect) in self.buttons.iter_mut().zip(layout.buttons.iter()) {
            button.rect = *rect;
            if let Some(action) = button.show(ui, &font) {
                clicked = Some(action);
            }
        }

        self.paint_legend(ui, layout.legend.min, layout.legend.width(), &legend_font, legend_row);

        let report_font = PitangaTheme::report_font(layout.report_font_size);
        self.panel
            .show(ui, layout.report, layout.report_padding, &report_font, &self.report);

        let egui_ctx = ui.ctx().clone();
        self.show_browser(&egui_ctx, ctx);

        clicked
    }

    fn paint_legend(&self, ui: &Ui, origin: Pos2, width: f32, font: &FontId, row: f32) {
        let measure = |s: &str| {
            ui.fonts(|f| f.layout_no_wrap(s.to_string(), font.clone(), PitangaColors::TEXT).size().x)
        };
        let lines = wrap_clamped(&self.legend_text(), width, LEGEND_LINES, measure);
        let painter = ui.painter();
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                origin + egui::vec2(0.0, i as f32 * row),
                Align2::LEFT_TOP,
                line,
                font.clone(),
                PitangaColors::TEXT,
            );
        }
    }

    fn show_browser(&mut self, egui_ctx: &Context, ctx: &mut AppContext) {
        let Some(browser) = self.browser.as_mut() else {
            return;
        };
        let recent: Vec<PathBuf> = ctx.settings.recent.existing().cloned().collect();
        match browser_window(egui_ctx, browser, &recent) {
            BrowserOutcome::Pending => {}
            BrowserOutcome::Cancelled => self.browser = None,
            BrowserOutcome::Picked(path) => {
                self.browser = None;
                self.select_file(path, ctx);
            }
        }
    }
}

fn browser_window(ctx: &Context, browser: &mut FileBrowser, recent: &[PathBuf]) -> BrowserOutcome {
    let mut outcome = BrowserOutcome::Pending;
    egui::Window::new("choose spreadsheet")
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(browser.current_dir.to_string_lossy().to_string());
            ui.separator();
            egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                let entries = browser.entries.clone();
                for (idx, entry) in entries.iter().enumerate() {
                    let selected = browser.selected_index == Some(idx);
                    let label = if entry.is_directory {
                        format!("{}/", entry.name)
                    } else {
                        entry.name.clone()
                    };
                    let r = ui.selectable_label(selected, label);
                    if r.clicked() {
                        browser.selected_index = Some(idx);
                    }
                    if r.double_clicked() {
                        if entry.is_directory {
                            if let Err(e) = browser.navigate_to(entry.path.clone()) {
                                log::warn!("could not open {:?}: {}", entry.path, e);
                            }
                        } else {
                            outcome = BrowserOutcome::Picked(entry.path.clone());
                        }
                    }
                }
            });

            if !recent.is_empty() {
                ui.separator();
                ui.label("recent:");
                for path in recent {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    if ui.selectable_label(false, name).on_hover_text(path.display().to_string()).clicked() {
                        outcome = BrowserOutcome::Picked(path.clone());
                    }
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("cancel").clicked() {
                    outcome = BrowserOutcome::Cancelled;
                }
                if ui.button("open").clicked() {
                    match browser.selected_entry().cloned() {
                        Some(entry) if entry.is_directory => {
                            if let Err(e) = browser.navigate_to(entry.path.clone()) {
                                log::warn!("could not open {:?}: {}", entry.path, e);
                            }
                        }
                        Some(entry) => outcome = BrowserOutcome::Picked(entry.path),
                        None => {}
                    }
                }
            });
        });
    outcome
}
