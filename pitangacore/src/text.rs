//! Width-aware wrapping and eliding.
//!
//! Both helpers take a `measure` function returning the rendered width of a
//! string, so they work with egui's font metrics at runtime and with a plain
//! character count in tests.

use crate::safety::safe_slice_to;

/// Marker appended to elided text.
pub const ELLIPSIS: &str = "…";

/// Greedy word wrap on single spaces. A word wider than `max_width` gets a
/// line of its own. Empty input yields one empty line.
pub fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        let candidate = candidate.trim().to_string();
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut `text` so that it plus [`ELLIPSIS`] fits in `max_width`.
/// Text that already fits is returned unchanged.
pub fn elide(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if measure(text) <= max_width {
        return text.to_string();
    }
    // longest byte prefix whose elided form still fits
    let (mut lo, mut hi) = (0usize, text.len());
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        let candidate = format!("{}{}", safe_slice_to(text, mid), ELLIPSIS);
        if measure(&candidate) <= max_width {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    format!("{}{}", safe_slice_to(text, lo), ELLIPSIS)
}

/// Wrap to at most `max_lines`. The last kept line is elided if text was
/// dropped, and any line wider than `max_width` is elided to fit.
pub fn wrap_clamped(
    text: &str,
    max_width: f32,
    max_lines: usize,
    measure: impl Fn(&str) -> f32,
) -> Vec<String> {
    let mut lines = wrap_words(text, max_width, &measure);
    if lines.len() > max_lines {
        lines.truncate(max_lines.max(1));
        if let Some(last) = lines.last_mut() {
            let dropped = format!("{}{}", last, ELLIPSIS);
            *last = elide(&dropped, max_width, &measure);
        }
    }
    // a single word wider than the line still has to fit
    for line in &mut lines {
        *line = elide(line, max_width, &measure);
    }
    lines
}
