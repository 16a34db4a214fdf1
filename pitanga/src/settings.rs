//! Persisted settings for pitanga

use crate::loader::{LoadOptions, DEFAULT_CSV_ROW_LIMIT};
use pitangacore::storage::{config_dir, documents_dir, write_json, RecentFiles};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Data rows read from a CSV before it is sampled
    pub csv_row_limit: usize,
    /// Where the file browser opens; Documents when unset
    pub start_dir: Option<PathBuf>,
    /// Image painted behind the menu; `img.png` next to the binary when unset
    pub background_image: Option<PathBuf>,
    pub recent: RecentFiles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_row_limit: DEFAULT_CSV_ROW_LIMIT,
            start_dir: None,
            background_image: None,
            recent: RecentFiles::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        config_dir("pitanga").join("settings.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read settings from `path`. A missing or unreadable file gives defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("could not read settings {:?}: {}", path, e);
                }
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring corrupt settings {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Err(e) = write_json(path, self) {
            log::warn!("could not save settings {:?}: {}", path, e);
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            csv_row_limit: self.csv_row_limit.max(1),
        }
    }

    /// Directory the file browser should open in. The most recent file's
    /// folder wins over the configured start directory.
    pub fn browse_dir(&self) -> PathBuf {
        self.recent
            .existing()
            .next()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .or_else(|| self.start_dir.clone().filter(|d| d.is_dir()))
            .unwrap_or_else(documents_dir)
    }
}
