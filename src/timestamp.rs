//! Wall-clock timestamp rendering for formatted lines.

use jiff::Zoned;
use jiff::fmt::strtime;

/// Default timestamp display pattern (strftime-compatible).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render the current local wall-clock time with the given pattern.
///
/// An invalid pattern falls back to [`DEFAULT_TIMESTAMP_FORMAT`] so that
/// line formatting never fails.
pub fn format_now(pattern: &str) -> String {
    format_at(&Zoned::now(), pattern)
}

/// Render a specific instant with the given pattern.
pub fn format_at(zdt: &Zoned, pattern: &str) -> String {
    strtime::format(pattern, zdt).unwrap_or_else(|_| {
        strtime::format(DEFAULT_TIMESTAMP_FORMAT, zdt).unwrap_or_default()
    })
}
