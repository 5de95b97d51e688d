//! `conlog` — colorized console line formatting for log events.
//!
//! This library renders a log event (level, message, wall-clock timestamp)
//! as a single ANSI-colored line:
//!
//! ```text
//! \x1b[31m[ERROR]\x1b[0m [2026/01/15 10:30:00] boom
//! ```
//!
//! It is a presentation layer: level filtering, entry buffering, and output
//! routing stay with the host logging facility. For hosts on the standard
//! `log` facade, [`ConsoleLogger`] wires the formatter to a sink.
//!
//! # Example
//!
//! ```
//! use conlog::{Level, LineFormatter, LogEvent};
//!
//! let formatter = LineFormatter::new();
//! let line = formatter.format(&LogEvent::new(Level::Info, "listening on :8080"));
//! assert!(String::from_utf8_lossy(&line).contains("INFO"));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use color::resolve_color;
pub use config::FormatterConfig;
pub use error::ConlogError;
pub use event::LogEvent;
pub use formatter::LineFormatter;
pub use level::Level;
pub use logger::{ConsoleLogger, init};
