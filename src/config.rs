//! Formatter configuration with TOML file support.
//!
//! Settings come from two sources (highest precedence first):
//! 1. Config file (explicitly loaded by the host)
//! 2. Built-in defaults
//!
//! Absent file fields keep their defaults.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::color::{self, resolve_color};
use crate::error::ConlogError;
use crate::level::Level;
use crate::timestamp::DEFAULT_TIMESTAMP_FORMAT;

/// Formatter settings.
///
/// Each formatter owns its copy; mutating one instance's colors never
/// affects another.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Timestamp display pattern (strftime-compatible).
    pub timestamp_format: String,
    /// Per-level ANSI color codes; unmapped levels render white.
    pub level_colors: HashMap<Level, u8>,
    /// Right-pad level labels to a fixed column width.
    pub padding_enabled: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            level_colors: color::default_colors(),
            padding_enabled: false,
        }
    }
}

impl FormatterConfig {
    /// Load configuration from a TOML file, keeping defaults for absent
    /// fields.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConlogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConlogError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// ```toml
    /// timestamp_format = "%H:%M:%S"
    /// padding = true
    ///
    /// [colors]
    /// warn = "light yellow"
    /// error = "red"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConlogError> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();
        config.apply_file_config(file);
        Ok(config)
    }

    /// Apply settings from a parsed config file.
    ///
    /// `[colors]` keys are level names (case-insensitive); unknown keys are
    /// ignored. Values are color names resolved via [`resolve_color`], so
    /// an unknown name lands on white rather than erroring.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(format) = file.timestamp_format {
            self.timestamp_format = format;
        }

        if let Some(padding) = file.padding {
            self.padding_enabled = padding;
        }

        if let Some(colors) = file.colors {
            for (key, name) in colors {
                if let Some(level) = Level::from_str_loose(&key) {
                    self.level_colors.insert(level, resolve_color(&name));
                }
            }
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    timestamp_format: Option<String>,
    padding: Option<bool>,
    colors: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.timestamp_format, "%Y/%m/%d %H:%M:%S");
        assert!(!config.padding_enabled);
        assert_eq!(config.level_colors[&Level::Debug], 96);
        assert_eq!(config.level_colors[&Level::Info], 32);
        assert_eq!(config.level_colors[&Level::Warn], 33);
        assert_eq!(config.level_colors[&Level::Error], 31);
        assert_eq!(config.level_colors[&Level::Fatal], 95);
        assert_eq!(config.level_colors[&Level::Panic], 34);
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = FormatterConfig::from_toml_str(
            r#"
            timestamp_format = "%H:%M:%S"
            padding = true

            [colors]
            warn = "light yellow"
            error = "magenta"
            "#,
        )
        .unwrap();

        assert_eq!(config.timestamp_format, "%H:%M:%S");
        assert!(config.padding_enabled);
        assert_eq!(config.level_colors[&Level::Warn], 93);
        assert_eq!(config.level_colors[&Level::Error], 35);
        // Untouched levels keep their presets
        assert_eq!(config.level_colors[&Level::Info], 32);
    }

    #[test]
    fn test_from_toml_str_partial_keeps_defaults() {
        let config = FormatterConfig::from_toml_str("padding = true").unwrap();
        assert!(config.padding_enabled);
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(config.level_colors, color::default_colors());
    }

    #[test]
    fn test_unknown_level_key_ignored() {
        let config = FormatterConfig::from_toml_str(
            r#"
            [colors]
            verbose = "red"
            "#,
        )
        .unwrap();
        assert_eq!(config.level_colors, color::default_colors());
    }

    #[test]
    fn test_unknown_color_name_resolves_white() {
        let config = FormatterConfig::from_toml_str(
            r#"
            [colors]
            info = "chartreuse"
            "#,
        )
        .unwrap();
        assert_eq!(config.level_colors[&Level::Info], 37);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = FormatterConfig::from_toml_str("padding = ").unwrap_err();
        assert!(matches!(err, ConlogError::Toml(_)));
    }
}
