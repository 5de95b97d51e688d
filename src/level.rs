//! Log level representation with parsing and display.
//!
//! Levels are ordered by severity: `Debug < Info < Warn < Error < Fatal
//! < Panic`. Display labels are upper-case; the widest is `WARNING`
//! (7 characters), which anchors padded output alignment.

use std::fmt;

/// Canonical log level enumeration.
///
/// Ordered by severity (ascending) via [`Ord`] on variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

/// Width of the widest level label (`WARNING`), used for padding.
pub const MAX_LABEL_WIDTH: usize = 7;

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Upper-case display label (e.g. `"INFO"`, `"WARNING"`).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "information" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            "panic" => Some(Self::Panic),
            _ => None,
        }
    }

    /// Map a [`log::Level`] from the host facade onto this crate's levels.
    ///
    /// The facade's `Trace` has no counterpart here and folds into `Debug`.
    pub const fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
