//! Speed-limit excursion latch.
//!
//! The driving-task record must contain each excursion exactly once, no
//! matter how many ticks it spans. The latch reports the transition into
//! the excursion, stays silent while it persists, and reports the return
//! to the normal band once.

use crate::events::DrivingEvent;

// =============================================================================
// Margins
// =============================================================================

/// Tolerance band around a speed limit in km/h. An excursion starts only
/// beyond this margin, in either direction.
pub const SPEED_LIMIT_MARGIN_KMH: f32 = 10.0;

const _: () = assert!(SPEED_LIMIT_MARGIN_KMH > 0.0);

// =============================================================================
// Latch
// =============================================================================

/// Latched one-shot reporting of speed-limit excursions.
#[derive(Default)]
pub struct SpeedLimitWatch {
    reported: bool,
}

impl SpeedLimitWatch {
    /// Create a new latch in the normal state.
    pub const fn new() -> Self { Self { reported: false } }

    /// Whether the vehicle is currently outside the normal band.
    #[inline]
    pub const fn exceeded(&self) -> bool { self.reported }

    /// Evaluate one tick.
    ///
    /// Returns the event fired by this tick, if any: the matching excursion
    /// event on the first tick outside the band, [`DrivingEvent::SpeedNormal`]
    /// on the first tick back inside, `None` otherwise. With no active limit
    /// (`current_limit_kmh == 0`) the band check is skipped entirely.
    pub fn update(
        &mut self,
        speed_kmh: f32,
        current_limit_kmh: f32,
        upcoming_limit_kmh: f32,
    ) -> Option<DrivingEvent> {
        let over = speed_kmh > current_limit_kmh + SPEED_LIMIT_MARGIN_KMH;
        let under = speed_kmh < upcoming_limit_kmh - SPEED_LIMIT_MARGIN_KMH;
        let outside = current_limit_kmh != 0.0 && (over || under);

        if outside {
            if !self.reported {
                self.reported = true;
                return Some(if over {
                    DrivingEvent::SpeedLimitExceeded
                } else {
                    DrivingEvent::SpeedLimitUnderExceeded
                });
            }
            None
        } else if self.reported {
            self.reported = false;
            Some(DrivingEvent::SpeedNormal)
        } else {
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceed_fires_once_then_normal_once() {
        let mut watch = SpeedLimitWatch::new();

        // limit 50, speed 65: more than 10 over -> fires once
        assert_eq!(watch.update(65.0, 50.0, 0.0), Some(DrivingEvent::SpeedLimitExceeded));
        assert!(watch.exceeded());

        // still speeding next tick: no refire
        assert_eq!(watch.update(66.0, 50.0, 0.0), None);

        // back into the band: normal fires exactly once
        assert_eq!(watch.update(55.0, 50.0, 0.0), Some(DrivingEvent::SpeedNormal));
        assert!(!watch.exceeded());
        assert_eq!(watch.update(55.0, 50.0, 0.0), None);
    }

    #[test]
    fn test_within_margin_is_normal() {
        let mut watch = SpeedLimitWatch::new();
        // 10 over is still inside the band; the excursion starts beyond it
        assert_eq!(watch.update(60.0, 50.0, 0.0), None);
        assert!(!watch.exceeded());
    }

    #[test]
    fn test_under_upcoming_limit() {
        let mut watch = SpeedLimitWatch::new();
        // upcoming limit 80, speed 65: more than 10 below -> under-exceeded
        assert_eq!(
            watch.update(65.0, 100.0, 80.0),
            Some(DrivingEvent::SpeedLimitUnderExceeded)
        );
        assert_eq!(watch.update(64.0, 100.0, 80.0), None);
    }

    #[test]
    fn test_no_active_limit_never_fires() {
        let mut watch = SpeedLimitWatch::new();
        assert_eq!(watch.update(250.0, 0.0, 0.0), None);
        assert!(!watch.exceeded());
    }
}
