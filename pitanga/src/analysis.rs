//! One call from a chosen path to report lines.
//!
//! Nothing here returns an error: every failure becomes a one-line report so
//! the screen always has something to show.

use crate::error::{display_ext, LoadError};
use crate::loader::{load_path, LoadOptions, SUPPORTED_EXTENSIONS};
use crate::summary::{summarize_source, SummaryReport};
use pitangacore::safety::catch_or;
use std::path::Path;

pub const NO_FILE_LINE: &str = "no file selected. click \"choose spreadsheet\" first.";
pub const ANALYSE_PROMPT_LINE: &str = "click \"analyse\" to continue.";

/// Load and summarize `path`.
pub fn analyse(path: Option<&Path>, options: &LoadOptions) -> SummaryReport {
    let Some(path) = path else {
        return SummaryReport::single(NO_FILE_LINE);
    };

    log::info!("analysing {:?}", path);
    catch_or(
        |panic| SummaryReport::single(format!("analysis error: {}", panic)),
        || match load_path(path, options) {
            Ok(source) => {
                let report = summarize_source(&source);
                log::info!(
                    "analysis of {:?} finished: {} report lines",
                    path,
                    report.len()
                );
                report
            }
            Err(e) => {
                log::warn!("analysis of {:?} failed: {}", path, e);
                error_report(&e)
            }
        },
    )
}

/// The one-line report for a load failure.
pub fn error_report(error: &LoadError) -> SummaryReport {
    match error {
        LoadError::Unsupported(ext) => SummaryReport::single(format!(
            "unsupported format: {} (supported: {})",
            display_ext(ext),
            SUPPORTED_EXTENSIONS.join(", ")
        )),
        other => SummaryReport::single(format!("analysis error: {}", other)),
    }
}

/// Shown right after a file is picked, before analysis runs.
pub fn selection_report(path: &Path) -> SummaryReport {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    SummaryReport::new(vec![
        format!("selected file: {}", name),
        ANALYSE_PROMPT_LINE.to_string(),
    ])
}

/// Shown when the file browser cannot list its directory.
pub fn picker_error_report(error: &impl std::fmt::Display) -> SummaryReport {
    SummaryReport::single(format!("could not open file picker: {}", error))
}
