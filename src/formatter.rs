//! Colorized line formatter for log events.
//!
//! Renders each event as a single ANSI-colored line:
//!
//! ```text
//! \x1b[31m[ERROR]\x1b[0m [2026/01/15 10:30:00] boom
//! ```
//!
//! The color wraps only the bracketed level badge; the timestamp and the
//! message stay uncolored. With padding enabled, the badge is right-padded
//! inside the brackets to the width of the widest label so timestamps line
//! up vertically.

use std::fmt::Write;

use crate::color::DEFAULT_COLOR;
use crate::config::FormatterConfig;
use crate::event::LogEvent;
use crate::level::{Level, MAX_LABEL_WIDTH};
use crate::timestamp;

/// Formats log events into colorized console lines.
///
/// Formatting is stateless; the only mutation is [`set_color`](Self::set_color).
/// Callers sharing one formatter across threads synchronize externally.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    config: FormatterConfig,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormatter {
    /// Create a formatter with default settings.
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::default())
    }

    /// Create a formatter from an explicit configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Override the color code for one level.
    pub fn set_color(&mut self, level: Level, code: u8) {
        self.config.level_colors.insert(level, code);
    }

    /// Color code for a level, falling back to white when unmapped.
    pub fn color_for(&self, level: Level) -> u8 {
        self.config
            .level_colors
            .get(&level)
            .copied()
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Format an event into a freshly allocated byte buffer.
    ///
    /// Never fails; unknown colors and levels fall back to defaults.
    pub fn format(&self, event: &LogEvent) -> Vec<u8> {
        let mut out = String::new();
        self.format_into(event, &mut out);
        out.into_bytes()
    }

    /// Format an event into a caller-supplied buffer.
    ///
    /// The line is appended; callers reusing a buffer clear it themselves.
    pub fn format_into(&self, event: &LogEvent, out: &mut String) {
        let color = self.color_for(event.level);
        let label = event.level.label();
        let timestamp = timestamp::format_now(&self.config.timestamp_format);

        let _ = write!(out, "\x1b[{color}m[{label}");
        if self.config.padding_enabled {
            for _ in label.len()..MAX_LABEL_WIDTH {
                out.push(' ');
            }
        }
        let _ = writeln!(out, "]\x1b[0m [{timestamp}] {}", event.message);
    }
}
