//! Console logger bridging the `log` facade to the line formatter.
//!
//! The host facade supplies records; each one is rendered through
//! [`LineFormatter`] and the resulting bytes are written to the sink.
//! Level filtering stays with the facade (`log::set_max_level`).

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::config::FormatterConfig;
use crate::error::ConlogError;
use crate::event::LogEvent;
use crate::formatter::LineFormatter;
use crate::level::Level;

/// A [`log::Log`] implementation writing colorized lines to a sink.
///
/// The formatter and the sink each sit behind a mutex: color overrides via
/// [`set_color`](Self::set_color) are the formatter's only mutable state,
/// and concurrent `log` calls must not interleave partial lines.
pub struct ConsoleLogger {
    formatter: Mutex<LineFormatter>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLogger {
    /// Logger writing to stdout.
    pub fn stdout(config: FormatterConfig) -> Self {
        Self::with_sink(config, Box::new(io::stdout()))
    }

    /// Logger writing to an arbitrary sink.
    pub fn with_sink(config: FormatterConfig, sink: Box<dyn Write + Send>) -> Self {
        Self {
            formatter: Mutex::new(LineFormatter::with_config(config)),
            sink: Mutex::new(sink),
        }
    }

    /// Override the color for one level on the shared formatter.
    pub fn set_color(&self, level: Level, code: u8) {
        self.formatter.lock().set_color(level, code);
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let event = LogEvent::new(Level::from_log(record.level()), record.args().to_string());
        let bytes = self.formatter.lock().format(&event);
        let _ = self.sink.lock().write_all(&bytes);
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

/// Install a [`ConsoleLogger`] on stdout as the global logger.
///
/// The facade's max level starts at `Info`; hosts raise or lower it with
/// [`log::set_max_level`].
pub fn init(config: FormatterConfig) -> Result<(), ConlogError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::stdout(config)))?;
    log::set_max_level(log::LevelFilter::Info);
    Ok(())
}
