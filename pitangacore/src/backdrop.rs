//! Optional background image behind the menu.

use egui::{pos2, Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureOptions};
use std::path::{Path, PathBuf};

/// File name looked up next to the executable when no path is configured.
pub const DEFAULT_BACKDROP: &str = "img.png";

/// Pick the backdrop path: the configured one if it exists, else
/// `img.png` beside the executable (or two levels up, for cargo runs).
pub fn resolve(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        log::warn!("configured background image not found: {:?}", path);
    }

    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?;
    let mut candidates = vec![dir.join(DEFAULT_BACKDROP)];
    // target/debug/pitanga -> workspace root
    if let Some(root) = dir.parent().and_then(Path::parent) {
        candidates.push(root.join(DEFAULT_BACKDROP));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Decode an image file into an egui image.
pub fn load_image(path: &Path) -> Result<ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Resolve, decode and upload the backdrop. Any failure is logged and
/// yields `None`, in which case screens paint the plain base colour.
pub fn load_texture(ctx: &Context, configured: Option<&Path>) -> Option<TextureHandle> {
    let path = resolve(configured)?;
    match load_image(&path) {
        Ok(image) => {
            log::info!("loaded background image {:?}", path);
            Some(ctx.load_texture("pitanga_backdrop", image, TextureOptions::LINEAR))
        }
        Err(e) => {
            log::warn!("failed to load background image {:?}: {}", path, e);
            None
        }
    }
}

/// Paint the backdrop stretched over `screen`, or the base colour without one.
pub fn paint(painter: &Painter, screen: Rect, texture: Option<&TextureHandle>) {
    match texture {
        Some(texture) => {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), screen, uv, Color32::WHITE);
        }
        None => {
            painter.rect_filled(screen, 0.0, crate::theme::PitangaColors::BASE);
        }
    }
}
