//! Storage utilities for pitanga
//!
//! Handles the in-app file browser, recent files, and config locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Recent files tracking, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFiles {
    pub files: Vec<PathBuf>,
    pub max_entries: usize,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::new(8)
    }
}

impl RecentFiles {
    pub fn new(max_entries: usize) -> Self {
        Self {
            files: Vec::new(),
            max_entries,
        }
    }

    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.insert(0, path);
        self.files.truncate(self.max_entries);
    }

    /// Entries that still exist on disk.
    pub fn existing(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().filter(|p| p.is_file())
    }
}

/// Serialize `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Simple file browser state
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    pub filter_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileBrowser {
    /// Browser rooted at `start_dir`, accepting only files whose extension is
    /// in `extensions` (case-insensitive). Fails if the directory can't be listed.
    pub fn open(start_dir: PathBuf, extensions: &[&str]) -> Result<Self> {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
            filter_extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        };
        browser.refresh()?;
        Ok(browser)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.current_dir)?.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with('.') {
                continue;
            }

            let is_directory = path.is_dir();
            if !is_directory && !self.accepts(&path) {
                continue;
            }

            let entry = FileEntry {
                name,
                path,
                is_directory,
            };
            if is_directory {
                dirs.push(entry);
            } else {
                files.push(entry);
            }
        }

        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        // directories first, then files
        self.entries.extend(dirs);
        self.entries.extend(files);
        Ok(())
    }

    /// Whether a file passes the extension filter.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.filter_extensions.is_empty() {
            return true;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.filter_extensions.iter().any(|f| *f == ext)
    }

    /// Enter `path` if it is a directory. On a listing error the browser stays
    /// where it was.
    pub fn navigate_to(&mut self, path: PathBuf) -> Result<()> {
        if !path.is_dir() {
            return Err(StorageError::NotFound(path));
        }
        let previous = std::mem::replace(&mut self.current_dir, path);
        if let Err(e) = self.refresh() {
            self.current_dir = previous;
            self.refresh()?;
            return Err(e);
        }
        Ok(())
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("br", "mariapitanga", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the documents directory
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .or_else(|| directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_recent_files_dedup_and_cap() {
        let mut recent = RecentFiles::new(2);
        recent.add(PathBuf::from("a.csv"));
        recent.add(PathBuf::from("b.csv"));
        recent.add(PathBuf::from("a.csv"));
        assert_eq!(recent.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        recent.add(PathBuf::from("c.xlsx"));
        assert_eq!(recent.files, vec![PathBuf::from("c.xlsx"), PathBuf::from("a.csv")]);
    }

    #[test]
    fn test_recent_files_existing_skips_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let kept = dir.path().join("vendas.csv");
        fs::write(&kept, "a\n1\n").unwrap();
        let mut recent = RecentFiles::default();
        recent.add(dir.path().join("apagado.csv"));
        recent.add(kept.clone());
        let existing: Vec<&PathBuf> = recent.existing().collect();
        assert_eq!(existing, vec![&kept]);
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recent.json");
        let mut recent = RecentFiles::new(4);
        recent.add(PathBuf::from("vendas.csv"));
        write_json(&path, &recent).unwrap();
        let back: RecentFiles = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, recent);
    }

    #[test]
    fn test_browser_filters_and_orders() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.CSV"), "x\n1\n").unwrap();
        fs::write(dir.path().join("a.xlsx"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join(".hidden.csv"), "").unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();

        let browser = FileBrowser::open(dir.path().to_path_buf(), &["xlsx", "xls", "csv"]).unwrap();
        let names: Vec<&str> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "zdir", "a.xlsx", "b.CSV"]);
    }

    #[test]
    fn test_browser_open_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(FileBrowser::open(missing, &["csv"]).is_err());
    }

    #[test]
    fn test_browser_navigate_and_select() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("data.csv"), "a\n1\n").unwrap();

        let mut browser = FileBrowser::open(dir.path().to_path_buf(), &["csv"]).unwrap();
        browser.navigate_to(dir.path().join("sub")).unwrap();
        browser.selected_index = browser.entries.iter().position(|e| e.name == "data.csv");
        let selected = browser.selected_entry().unwrap();
        assert!(!selected.is_directory);
        assert_eq!(selected.path, dir.path().join("sub").join("data.csv"));

        let err = browser.navigate_to(dir.path().join("sub").join("data.csv")).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
        assert_eq!(browser.current_dir, dir.path().join("sub"));
    }
}
