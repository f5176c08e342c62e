//! Driving-event log.
//!
//! Provides the typed event set reported by the cockpit and a bounded ring
//! buffer of log lines. Events that matter to the driving-task record
//! (speed-limit excursions) are fired exactly once per transition by their
//! producers; the log itself just stores whatever it is given.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DrivingLog::new();
//! log.record(DrivingEvent::SpeedLimitExceeded);
//! log.push("Settings applied: 1920 x 1080");
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Driving Events
// =============================================================================

/// One-shot notifications emitted by the cockpit components.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrivingEvent {
    /// Speed rose more than the margin above the active limit.
    SpeedLimitExceeded,
    /// Speed dropped more than the margin below an upcoming limit.
    SpeedLimitUnderExceeded,
    /// Speed returned to the normal band after an excursion.
    SpeedNormal,
    /// The graphics settings were applied and a renderer restart requested.
    SettingsApplied,
    /// Display-mode enumeration failed; the dialog offers no resolutions.
    ModeEnumerationFailed,
}

impl DrivingEvent {
    /// Log line for this event.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpeedLimitExceeded => "Speed limit exceeded",
            Self::SpeedLimitUnderExceeded => "Speed limit under-exceeded",
            Self::SpeedNormal => "Speed back to normal",
            Self::SettingsApplied => "Graphic settings applied",
            Self::ModeEnumerationFailed => "Display mode enumeration failed",
        }
    }
}

// =============================================================================
// Driving Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Driving Log Ring Buffer
// =============================================================================

/// Ring buffer for driving-event log lines.
///
/// Stores the last [`LOG_BUFFER_SIZE`] messages; old messages are dropped
/// automatically when the buffer is full.
pub struct DrivingLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DrivingLog {
    /// Create a new empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record a typed event.
    pub fn record(
        &mut self,
        event: DrivingEvent,
    ) {
        self.push(event.as_str());
    }

    /// Push a log line. If the buffer is full, the oldest line is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate message if too long
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Number of stored lines.
    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    /// Check if the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DrivingLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_event() {
        let mut log = DrivingLog::new();
        assert!(log.is_empty());

        log.record(DrivingEvent::SpeedLimitExceeded);
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap(), "Speed limit exceeded");
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = DrivingLog::new();

        for _ in 0..LOG_BUFFER_SIZE {
            log.record(DrivingEvent::SpeedNormal);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("newest");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().last().unwrap(), "newest");
    }

    #[test]
    fn test_long_line_truncated() {
        let mut log = DrivingLog::new();
        let long_msg = "this line is far longer than the configured maximum line length";
        log.push(long_msg);

        let stored = log.iter().next().unwrap();
        assert!(stored.len() < LOG_LINE_LENGTH);
    }
}
