//! pitangacore: shared UI kit for the Maria Pitanga analysis center

pub mod animation;
pub mod backdrop;
pub mod repaint;
pub mod safety;
pub mod shade;
pub mod storage;
pub mod text;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::PitangaTheme;
