//! Crash-proofing helpers.
//!
//! The UI must never go down because of a file it was asked to look at, and
//! text shown in the legend is cut at arbitrary byte positions. These helpers
//! cover both: panic isolation and UTF-8 safe slicing.

/// Snap a byte position back to the nearest UTF-8 character boundary.
/// Positions past the end snap to `s.len()`.
pub fn snap_to_char_boundary(s: &str, byte_pos: usize) -> usize {
    if byte_pos >= s.len() {
        return s.len();
    }
    (0..=byte_pos)
        .rev()
        .find(|&pos| s.is_char_boundary(pos))
        .unwrap_or(0)
}

/// `&s[..byte_pos]`, with `byte_pos` snapped onto a char boundary.
pub fn safe_slice_to(s: &str, byte_pos: usize) -> &str {
    &s[..snap_to_char_boundary(s, byte_pos)]
}

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback(message)` on panic, where `message` is the panic payload.
pub fn catch_or<T>(fallback: impl FnOnce(String) -> T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("caught panic: {}", message);
            fallback(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_ascii() {
        let s = "hello";
        assert_eq!(snap_to_char_boundary(s, 0), 0);
        assert_eq!(snap_to_char_boundary(s, 3), 3);
        assert_eq!(snap_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn test_snap_accented() {
        // 'á' and 'ç' are 2 bytes each
        let s = "açaí";
        assert_eq!(snap_to_char_boundary(s, 1), 1);
        assert_eq!(snap_to_char_boundary(s, 2), 1);
        assert_eq!(snap_to_char_boundary(s, 3), 3);
        assert_eq!(safe_slice_to(s, 5), "aça");
        assert_eq!(safe_slice_to(s, 6), "açaí");
    }

    #[test]
    fn test_snap_empty() {
        assert_eq!(snap_to_char_boundary("", 0), 0);
        assert_eq!(safe_slice_to("", 3), "");
    }

    #[test]
    fn test_catch_or_passes_value_through() {
        let v = catch_or(|_| 0, || 42);
        assert_eq!(v, 42);
    }

    #[test]
    fn test_catch_or_recovers_panic_message() {
        let msg = catch_or(|m| m, || -> String { panic!("bad sheet") });
        assert_eq!(msg, "bad sheet");
    }
}
