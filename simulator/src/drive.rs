//! Drive model: fake vehicle signals for the simulator host.
//!
//! Produces a plausible drive using sine-based signals, a fixed gear map
//! and a looping course of speed-limit zones, so the cockpit has live data
//! without a physics engine behind it.

use cockpit_common::vehicle::{VehicleFeed, VehicleSample};

use crate::timing::TICK_SECONDS;

// =============================================================================
// Course Definition
// =============================================================================

/// Speed-limit zones along the course: (zone start in meters, limit in km/h).
const ZONES: [(f32, f32); 4] = [(0.0, 50.0), (1500.0, 100.0), (4000.0, 70.0), (7000.0, 50.0)];

/// Total course length in meters; the course loops.
const COURSE_LENGTH_M: f32 = 9000.0;

/// Distance before a zone boundary at which its limit becomes "upcoming".
const UPCOMING_LOOKAHEAD_M: f32 = 300.0;

// =============================================================================
// Gear Map
// =============================================================================

/// Upshift speeds in km/h; index = gear - 1.
const SHIFT_POINTS_KMH: [f32; 6] = [20.0, 40.0, 65.0, 95.0, 130.0, f32::MAX];

/// Engine idle speed in rpm.
const IDLE_RPM: f32 = 900.0;

/// Revs gained across one gear's speed band.
const BAND_RPM: f32 = 2800.0;

// =============================================================================
// Drive Model
// =============================================================================

/// Scripted drive producing one [`VehicleSample`] per tick.
pub struct DriveModel {
    t: f32,
    mileage_m: f32,
    speed_kmh: f32,
    automatic: bool,
    total_fuel_l: f32,
}

impl DriveModel {
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            mileage_m: 0.0,
            speed_kmh: 0.0,
            automatic: true,
            total_fuel_l: 0.0,
        }
    }

    pub fn toggle_transmission(&mut self) { self.automatic = !self.automatic }

    /// Current gear and transmission type for the gear display.
    pub fn gear(&self) -> (i32, bool) { (gear_for_speed(self.speed_kmh), self.automatic) }

    /// Momentary consumption; negative below walking pace (not measurable).
    pub fn liters_per_100km(&self) -> f32 {
        if self.speed_kmh < 1.0 {
            -1.0
        } else {
            4.0 + self.speed_kmh / 40.0
        }
    }

    pub fn liters_per_hour(&self) -> f32 { self.liters_per_100km().max(0.0) * self.speed_kmh / 100.0 }

    pub const fn total_fuel(&self) -> f32 { self.total_fuel_l }
}

impl VehicleFeed for DriveModel {
    fn sample(&mut self) -> VehicleSample {
        self.t += TICK_SECONDS;

        // Slow cruise wave with a faster wobble on top; clamped so the
        // vehicle never rolls backwards in the scripted drive
        let cruise = 70.0 + 65.0 * (self.t * 0.11).sin();
        let wobble = 4.0 * (self.t * 0.9).sin();
        self.speed_kmh = (cruise + wobble).max(0.0);

        self.mileage_m += self.speed_kmh / 3.6 * TICK_SECONDS;
        self.total_fuel_l += self.liters_per_hour() / 3600.0 * TICK_SECONDS;

        let (current_limit, upcoming_limit) = zone_limits(self.mileage_m % COURSE_LENGTH_M);

        VehicleSample {
            speed_kmh: self.speed_kmh,
            rpm: rpm_for_speed(self.speed_kmh),
            mileage_m: self.mileage_m,
            current_limit_kmh: current_limit,
            upcoming_limit_kmh: upcoming_limit,
        }
    }
}

// =============================================================================
// Signal Helpers
// =============================================================================

/// Gear 1-6 for the current speed.
fn gear_for_speed(speed_kmh: f32) -> i32 {
    let mut gear = 1;
    for shift_point in SHIFT_POINTS_KMH {
        if speed_kmh < shift_point {
            break;
        }
        gear += 1;
    }
    gear.min(6)
}

/// Engine speed for the current road speed: revs climb through each gear's
/// band and drop on the upshift.
fn rpm_for_speed(speed_kmh: f32) -> f32 {
    let gear = gear_for_speed(speed_kmh);
    let band_start = if gear == 1 { 0.0 } else { SHIFT_POINTS_KMH[gear as usize - 2] };
    let band_end = SHIFT_POINTS_KMH[gear as usize - 1].min(260.0);
    let band = (band_end - band_start).max(1.0);
    IDLE_RPM + (speed_kmh - band_start) / band * BAND_RPM
}

/// Active and upcoming limit for a position on the course.
///
/// The upcoming limit is only reported within the lookahead distance of the
/// next zone boundary; otherwise it is 0 (none).
fn zone_limits(course_m: f32) -> (f32, f32) {
    let mut zone_index = 0;
    for (index, (start_m, _)) in ZONES.iter().copied().enumerate() {
        if course_m >= start_m {
            zone_index = index;
        }
    }

    let current = ZONES[zone_index].1;
    let upcoming = match ZONES.get(zone_index + 1).copied() {
        Some((next_start, next_limit)) if course_m >= next_start - UPCOMING_LOOKAHEAD_M => next_limit,
        _ => 0.0,
    };

    (current, upcoming)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_limits_follow_course() {
        assert_eq!(zone_limits(0.0), (50.0, 0.0));
        assert_eq!(zone_limits(2000.0), (100.0, 0.0));
        assert_eq!(zone_limits(4500.0), (70.0, 0.0));
    }

    #[test]
    fn test_upcoming_limit_within_lookahead() {
        // 100 m before the 4000 m boundary the 70 km/h zone is upcoming
        assert_eq!(zone_limits(3900.0), (100.0, 70.0));
        // Well before the boundary nothing is upcoming
        assert_eq!(zone_limits(3000.0), (100.0, 0.0));
    }

    #[test]
    fn test_gear_increases_with_speed() {
        assert_eq!(gear_for_speed(0.0), 1);
        assert_eq!(gear_for_speed(30.0), 2);
        assert_eq!(gear_for_speed(100.0), 5);
        assert_eq!(gear_for_speed(200.0), 6);
    }

    #[test]
    fn test_rpm_stays_on_scale() {
        for speed in 0..=260 {
            let rpm = rpm_for_speed(speed as f32);
            assert!(rpm >= IDLE_RPM);
            assert!(rpm <= IDLE_RPM + BAND_RPM + 1.0);
        }
    }

    #[test]
    fn test_mileage_accumulates() {
        let mut model = DriveModel::new();
        let before = model.sample().mileage_m;
        let after = model.sample().mileage_m;
        assert!(after >= before);
    }
}
