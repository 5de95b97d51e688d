//! Log event input record.

use crate::level::Level;

/// A single log event handed to the formatter by the host logging core.
///
/// The timestamp is not part of the event; it is read from the wall clock
/// at format time.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
}

impl LogEvent {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
